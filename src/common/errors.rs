use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Every failure that can reach the request boundary.
///
/// Per-server failures inside the redirect chain never show up here: they are
/// logged and dropped where they happen (see [`crate::resolver::chain`]).
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    BadRequest(String),

    #[error("TMDB API key is not configured (set TMDB_API_KEY or [tmdb].api_key)")]
    Config,

    #[error("Failed to convert TMDB ID to IMDB ID: {0}")]
    Resolution(String),

    #[error("IMDB ID not found for this TMDB ID")]
    ImdbNotFound,

    #[error("Failed to fetch embed page: {0}")]
    Embed(String),

    #[error("No servers found")]
    NoServersFound,

    #[error("No streams found")]
    NoStreamsFound,

    #[error("Failed to fetch upstream stream: {0}")]
    Proxy(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ImdbNotFound | Self::NoServersFound | Self::NoStreamsFound => {
                StatusCode::NOT_FOUND
            }
            Self::Config | Self::Resolution(_) | Self::Embed(_) | Self::Proxy(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// JSON error body: `{ "error": "<message>" }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!("{}", message);
        } else {
            tracing::warn!("{}", message);
        }
        (status, Json(ErrorBody::new(message))).into_response()
    }
}
