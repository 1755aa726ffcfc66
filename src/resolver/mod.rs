//! TMDB id → IMDB id → embed page → server tokens → rcp → prorcp → media URL.

pub mod chain;
pub mod embed;
pub mod pattern;
pub mod servers;
pub mod tmdb;

use reqwest::Client;
use tracing::{info, warn};

use crate::{
    common::{RelayError, types::ImdbId},
    configs::Config,
    protocol::media::{BaseDomain, MediaRequest, StreamCandidate},
};

pub use chain::{ChainError, ChainResolver};
pub use embed::{EmbedClient, EmbedPage};
pub use servers::extract_servers;
pub use tmdb::TmdbClient;

/// Outcome of a successful resolution. `streams` is never empty.
#[derive(Debug, Clone)]
pub struct ResolvedMedia {
    pub imdb_id: ImdbId,
    pub streams: Vec<StreamCandidate>,
}

pub struct Resolver {
    pub tmdb: TmdbClient,
    pub embed: EmbedClient,
    pub chain: ChainResolver,
}

impl Resolver {
    pub fn new(http: Client, config: &Config, fallback: BaseDomain) -> Self {
        Self {
            tmdb: TmdbClient::new(http.clone(), &config.tmdb),
            embed: EmbedClient::new(http.clone(), &config.embed.base_url, fallback),
            chain: ChainResolver::new(http, config.embed.max_concurrent_servers),
        }
    }

    pub async fn resolve(&self, request: &MediaRequest) -> Result<ResolvedMedia, RelayError> {
        info!(
            "Converting TMDB ID {} ({}) to IMDB ID...",
            request.tmdb_id(),
            request.kind()
        );
        let imdb_id = self
            .tmdb
            .resolve_imdb_id(request.tmdb_id(), request.kind())
            .await?
            .ok_or(RelayError::ImdbNotFound)?;

        let page = self.embed.fetch(&imdb_id, request).await?;
        info!(
            "Fetched embed page {} (redirect origin {})",
            page.url, page.base_domain
        );

        // A page without a server list is reported like one whose servers all failed.
        let tokens = match extract_servers(&page.html) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("{}: {}", page.url, e);
                return Err(RelayError::NoStreamsFound);
            }
        };

        let streams = self.chain.resolve_chain(&tokens, &page.base_domain).await;
        info!(
            "{} of {} server(s) resolved for {}",
            streams.len(),
            tokens.len(),
            imdb_id
        );

        if streams.is_empty() {
            return Err(RelayError::NoStreamsFound);
        }
        Ok(ResolvedMedia { imdb_id, streams })
    }
}
