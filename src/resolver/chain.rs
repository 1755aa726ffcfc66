use futures::{StreamExt, stream};
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    common::HttpClient,
    protocol::media::{BaseDomain, StreamCandidate},
    resolver::pattern::{PRORCP_FILE, RCP_SOURCE, extract_first_match},
};

const PRORCP_PREFIX: &str = "/prorcp/";

/// Why one server token did not produce a stream. Never fatal for the batch.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("server {token}: request to {url} failed: {source}")]
    Http {
        token: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server {token}: no prorcp source in rcp page")]
    MissingSource { token: String },

    #[error("server {token}: no file in prorcp page")]
    MissingFile { token: String },
}

/// Walks `rcp/{token}` → `prorcp/{path}` → file URL for every server token.
pub struct ChainResolver {
    http: Client,
    max_concurrent: usize,
}

impl ChainResolver {
    pub fn new(http: Client, max_concurrent: usize) -> Self {
        Self {
            http,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Every token that made it through both hops, in token order.
    /// An empty result is a legitimate answer; the caller decides what it means.
    pub async fn resolve_chain(
        &self,
        tokens: &[String],
        base: &BaseDomain,
    ) -> Vec<StreamCandidate> {
        self.resolve_all(tokens, base)
            .await
            .into_iter()
            .filter_map(|outcome| match outcome {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    warn!("Skipping {}", e);
                    None
                }
            })
            .collect()
    }

    /// One outcome per token. Tokens run concurrently up to `max_concurrent`,
    /// the two hops of a single token always run in sequence.
    pub async fn resolve_all(
        &self,
        tokens: &[String],
        base: &BaseDomain,
    ) -> Vec<Result<StreamCandidate, ChainError>> {
        // Owned tokens keep the fan-out future `Send` inside axum handlers.
        stream::iter(tokens.iter().cloned())
            .map(|token| async move { self.resolve_token(&token, base).await })
            .buffered(self.max_concurrent)
            .collect::<Vec<_>>()
            .await
    }

    pub async fn resolve_token(
        &self,
        token: &str,
        base: &BaseDomain,
    ) -> Result<StreamCandidate, ChainError> {
        let rcp_url = base.join(&format!("rcp/{}", token));
        let rcp_page = self.fetch_text(token, &rcp_url).await?;
        let source =
            extract_first_match(&rcp_page, &RCP_SOURCE).ok_or_else(|| ChainError::MissingSource {
                token: token.to_string(),
            })?;

        let prorcp_url = base.join(&format!("prorcp/{}", strip_prorcp_prefix(&source)));
        let prorcp_page = self.fetch_text(token, &prorcp_url).await?;
        let media_url =
            extract_first_match(&prorcp_page, &PRORCP_FILE).ok_or_else(|| ChainError::MissingFile {
                token: token.to_string(),
            })?;

        debug!("Server {} resolved to {}", token, media_url);
        Ok(StreamCandidate {
            media_url,
            referer: base.origin(),
        })
    }

    async fn fetch_text(&self, token: &str, url: &str) -> Result<String, ChainError> {
        let http_err = |source| ChainError::Http {
            token: token.to_string(),
            url: url.to_string(),
            source,
        };

        debug!("Server {}: GET {}", token, url);
        let resp = self
            .http
            .get(url)
            .headers(HttpClient::iframe_headers())
            .send()
            .await
            .map_err(http_err)?;

        if !resp.status().is_success() {
            debug!("Server {}: {} answered {}", token, url, resp.status());
        }
        resp.text().await.map_err(http_err)
    }
}

/// `/prorcp/abc` → `abc`. Only the first occurrence is removed.
fn strip_prorcp_prefix(source: &str) -> String {
    source.replacen(PRORCP_PREFIX, "", 1)
}
