use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the API and the relay; browsers only need GET and preflight.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
