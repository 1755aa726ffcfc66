use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    common::{HttpClient, RelayError, types::ImdbId},
    protocol::media::{BaseDomain, MediaRequest},
    resolver::pattern::{IFRAME_SRC, extract_first_match},
};

/// Raw embed page plus the origin its player iframe points at.
#[derive(Debug, Clone)]
pub struct EmbedPage {
    pub url: String,
    pub html: String,
    pub base_domain: BaseDomain,
}

pub struct EmbedClient {
    http: Client,
    base_url: String,
    fallback: BaseDomain,
}

impl EmbedClient {
    pub fn new(http: Client, base_url: &str, fallback: BaseDomain) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            fallback,
        }
    }

    pub fn embed_url(&self, imdb_id: &ImdbId, request: &MediaRequest) -> String {
        format!("{}/{}", self.base_url, request.embed_path(imdb_id))
    }

    /// A page without an iframe is not an error here; it falls back to the
    /// known redirect origin and lets server extraction decide.
    pub async fn fetch(
        &self,
        imdb_id: &ImdbId,
        request: &MediaRequest,
    ) -> Result<EmbedPage, RelayError> {
        let url = self.embed_url(imdb_id, request);
        debug!("Fetching embed page {}", url);

        let resp = self
            .http
            .get(&url)
            .headers(HttpClient::iframe_headers())
            .send()
            .await
            .map_err(|e| RelayError::Embed(e.to_string()))?;

        if !resp.status().is_success() {
            debug!("Embed page {} answered {}", url, resp.status());
        }

        let html = resp
            .text()
            .await
            .map_err(|e| RelayError::Embed(e.to_string()))?;
        let base_domain = base_domain_from_html(&html, &self.fallback);

        Ok(EmbedPage {
            url,
            html,
            base_domain,
        })
    }
}

pub fn base_domain_from_html(html: &str, fallback: &BaseDomain) -> BaseDomain {
    let Some(src) = extract_first_match(html, &IFRAME_SRC) else {
        debug!("No iframe source on embed page, using {}", fallback);
        return fallback.clone();
    };

    match BaseDomain::from_url(&src) {
        Some(domain) => domain,
        None => {
            warn!("Unusable iframe source '{}', using {}", src, fallback);
            fallback.clone()
        }
    }
}
