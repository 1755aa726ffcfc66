use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};

use crate::{
    common::RelayError,
    protocol::models::StreamQuery,
    proxy::ProxyRequest,
    server::AppState,
};

/// GET /stream?url=...&referer=...
pub async fn proxy_stream(
    headers: HeaderMap,
    Query(params): Query<StreamQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, RelayError> {
    let range = headers
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let media_url = params
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| RelayError::BadRequest("Stream URL required".into()))?;

    let request = ProxyRequest {
        media_url,
        referer: params.referer,
        range,
    };
    Ok(state.proxy.open(request).await?.into_response())
}
