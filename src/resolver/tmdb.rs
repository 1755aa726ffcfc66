use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{
    common::{
        RelayError,
        types::{ImdbId, TmdbId},
    },
    configs::TmdbConfig,
    protocol::media::MediaKind,
};

/// Translates TMDB ids into the IMDB ids the embed site is keyed by.
pub struct TmdbClient {
    http: Client,
    api_base: String,
    api_key: Option<String>,
}

impl TmdbClient {
    pub fn new(http: Client, config: &TmdbConfig) -> Self {
        Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        }
    }

    /// `Ok(None)` means TMDB answered but knows no IMDB id for the title.
    ///
    /// The detail resource is tried first; when it carries no `external_ids`
    /// object the dedicated `/external_ids` sub-resource is consulted.
    pub async fn resolve_imdb_id(
        &self,
        tmdb_id: &TmdbId,
        kind: MediaKind,
    ) -> Result<Option<ImdbId>, RelayError> {
        let api_key = self.api_key.as_deref().ok_or(RelayError::Config)?;
        let endpoint = self.endpoint(tmdb_id, kind);

        let details = self.fetch_json(&endpoint, api_key).await?;
        let imdb_id = match details.get("external_ids").filter(|v| !v.is_null()) {
            Some(external) => imdb_field(external),
            None => {
                debug!(
                    "TMDB {} {}: no external_ids on details, querying sub-resource",
                    kind, tmdb_id
                );
                let external = self
                    .fetch_json(&format!("{}/external_ids", endpoint), api_key)
                    .await?;
                imdb_field(&external)
            }
        };

        debug!("TMDB {} {} -> {:?}", kind, tmdb_id, imdb_id);
        Ok(imdb_id.map(ImdbId))
    }

    /// The id is a single path segment; `?`, `/` and friends cannot retarget the request.
    fn endpoint(&self, tmdb_id: &TmdbId, kind: MediaKind) -> String {
        format!(
            "{}/{}/{}",
            self.api_base,
            kind,
            urlencoding::encode(tmdb_id)
        )
    }

    // Status codes are not inspected: TMDB error payloads are JSON without the field.
    async fn fetch_json(&self, url: &str, api_key: &str) -> Result<Value, RelayError> {
        let resp = self
            .http
            .get(url)
            .query(&[("api_key", api_key)])
            .send()
            .await
            .map_err(|e| RelayError::Resolution(e.without_url().to_string()))?;

        if !resp.status().is_success() {
            debug!("TMDB {} answered {}", url, resp.status());
        }

        resp.json::<Value>()
            .await
            .map_err(|e| RelayError::Resolution(e.without_url().to_string()))
    }
}

fn imdb_field(value: &Value) -> Option<String> {
    value
        .get("imdb_id")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
