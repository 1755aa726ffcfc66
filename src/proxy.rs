//! Relays media bytes from the resolved host with the headers it expects.
//!
//! The target URL is taken as given; no check ties it to a previously resolved
//! origin.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use futures::TryStreamExt;
use reqwest::Client;
use tracing::{debug, info};

use crate::common::{HttpClient, RelayError};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// One client playback call.
#[derive(Debug, Clone)]
pub struct ProxyRequest {
    pub media_url: String,
    pub referer: Option<String>,
    /// Raw `Range` header from the client, if any.
    pub range: Option<String>,
}

pub struct StreamProxy {
    http: Client,
    default_referer: String,
}

/// Upstream response whose body has not been read yet.
pub struct ProxiedStream {
    pub status: StatusCode,
    pub headers: HeaderMap,
    upstream: reqwest::Response,
}

impl StreamProxy {
    pub fn new(http: Client, default_referer: impl Into<String>) -> Self {
        Self {
            http,
            default_referer: default_referer.into(),
        }
    }

    /// Sends the upstream request and returns as soon as headers arrive.
    /// Only a failed connection is an error; upstream error statuses are relayed.
    pub async fn open(&self, request: ProxyRequest) -> Result<ProxiedStream, RelayError> {
        let referer = self.effective_referer(request.referer.as_deref());
        let range = request.range.as_deref().unwrap_or("");

        info!("Proxying stream: {} (Range: {:?})", request.media_url, range);

        let upstream = self
            .http
            .get(&request.media_url)
            .headers(HttpClient::media_headers(referer, range))
            .send()
            .await
            .map_err(|e| RelayError::Proxy(e.to_string()))?;

        let status = upstream.status();
        debug!("Upstream {} answered {}", request.media_url, status);

        Ok(ProxiedStream {
            status,
            headers: relay_headers(upstream.headers()),
            upstream,
        })
    }

    /// The client's referer when it can go out as a header, the default otherwise.
    fn effective_referer<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(r) if !r.is_empty() && HeaderValue::from_str(r).is_ok() => r,
            Some(r) if !r.is_empty() => {
                debug!("Referer {:?} is not a valid header value, using default", r);
                &self.default_referer
            }
            _ => &self.default_referer,
        }
    }
}

/// Content type (with a fallback), length and range headers from upstream, plus
/// a wildcard CORS origin whatever upstream said.
fn relay_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();

    let content_type = upstream
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(FALLBACK_CONTENT_TYPE));
    headers.insert(header::CONTENT_TYPE, content_type);

    for name in [
        header::CONTENT_LENGTH,
        header::CONTENT_RANGE,
        header::ACCEPT_RANGES,
    ] {
        if let Some(v) = upstream.get(&name) {
            headers.insert(name, v.clone());
        }
    }

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers
}

impl IntoResponse for ProxiedStream {
    fn into_response(self) -> Response {
        // Chunks are pulled only as fast as the client reads; dropping the
        // response drops the upstream connection with it.
        let body = Body::from_stream(self.upstream.bytes_stream().map_err(std::io::Error::other));
        (self.status, self.headers, body).into_response()
    }
}
