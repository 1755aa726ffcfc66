use axum::response::Json;

use crate::{common::banner::BuildInfo, protocol::models::HealthResponse};

/// GET /
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// GET /version
pub async fn version() -> Json<BuildInfo> {
    tracing::debug!("GET /version");
    Json(BuildInfo::default())
}
