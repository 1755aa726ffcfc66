use crate::{
  common::{HttpClient, types::AnyResult},
  configs::Config,
  protocol::media::BaseDomain,
  proxy::StreamProxy,
  resolver::Resolver,
};

/// Top-level application state. Read-only once built; shared by every request.
pub struct AppState {
  pub resolver: Resolver,
  pub proxy: StreamProxy,
}

impl AppState {
  pub fn new(config: Config) -> AnyResult<Self> {
    let fallback = BaseDomain::from_url(&config.embed.fallback_domain).ok_or_else(|| {
      format!(
        "[embed].fallback_domain '{}' is not an absolute URL",
        config.embed.fallback_domain
      )
    })?;

    let scraping = HttpClient::scraping(&config.http)?;
    let streaming = HttpClient::streaming(&config.http)?;

    if config.tmdb_api_key().is_none() {
      tracing::warn!("No TMDB API key configured; /movie and /tv will answer 500 until TMDB_API_KEY is set");
    }

    Ok(Self {
      resolver: Resolver::new(scraping, &config, fallback.clone()),
      proxy: StreamProxy::new(streaming, fallback.origin()),
    })
  }
}
