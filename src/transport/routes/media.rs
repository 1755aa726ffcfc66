use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::{
    common::RelayError,
    protocol::{
        media::{MediaRequest, parse_leading_int},
        models::{MediaResponse, StreamEntry},
    },
    resolver::ResolvedMedia,
    server::AppState,
};

/// GET /movie/{tmdb_id}
pub async fn get_movie(
    Path(tmdb_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<MediaResponse>, RelayError> {
    tracing::info!("GET /movie/{}", tmdb_id);

    let tmdb_id = tmdb_id.trim();
    if tmdb_id.is_empty() {
        return Err(RelayError::BadRequest("TMDB ID required".into()));
    }

    let request = MediaRequest::movie(tmdb_id);
    let resolved = state.resolver.resolve(&request).await?;
    Ok(Json(to_response(&request, resolved)))
}

/// GET /tv/{tmdb_id}/{season}/{episode}
pub async fn get_episode(
    Path((tmdb_id, season, episode)): Path<(String, String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<MediaResponse>, RelayError> {
    tracing::info!("GET /tv/{}/{}/{}", tmdb_id, season, episode);

    let tmdb_id = tmdb_id.trim();
    let (Some(season), Some(episode)) = (parse_leading_int(&season), parse_leading_int(&episode))
    else {
        return Err(RelayError::BadRequest(
            "TMDB ID, season, and episode required".into(),
        ));
    };
    if tmdb_id.is_empty() {
        return Err(RelayError::BadRequest(
            "TMDB ID, season, and episode required".into(),
        ));
    }

    let request = MediaRequest::episode(tmdb_id, season, episode);
    let resolved = state.resolver.resolve(&request).await?;
    Ok(Json(to_response(&request, resolved)))
}

fn to_response(request: &MediaRequest, resolved: ResolvedMedia) -> MediaResponse {
    let (season, episode) = match request {
        MediaRequest::Movie { .. } => (None, None),
        MediaRequest::Episode {
            season, episode, ..
        } => (Some(*season), Some(*episode)),
    };

    MediaResponse {
        tmdb_id: request.tmdb_id().to_string(),
        imdb_id: resolved.imdb_id.to_string(),
        season,
        episode,
        kind: request.kind().to_string(),
        streams: resolved.streams.iter().map(StreamEntry::from).collect(),
    }
}
