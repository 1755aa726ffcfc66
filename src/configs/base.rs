use serde::{Deserialize, Serialize};

use crate::{common::types::AnyResult, configs::*};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
  #[serde(default)]
  pub server: ServerConfig,
  #[serde(default)]
  pub tmdb: TmdbConfig,
  #[serde(default)]
  pub embed: EmbedConfig,
  #[serde(default)]
  pub http: HttpConfig,
  pub logging: Option<LoggingConfig>,
}

impl Config {
  /// Reads `config.toml` (or `config.default.toml`), then applies environment overrides.
  /// Missing files are not an error: every section has usable defaults.
  pub fn load() -> AnyResult<Self> {
    let config_path = if std::path::Path::new("config.toml").exists() {
      Some("config.toml")
    } else if std::path::Path::new("config.default.toml").exists() {
      Some("config.default.toml")
    } else {
      None
    };

    let mut config = match config_path {
      Some(path) => {
        crate::log_println!("Loading configuration from: {}", path);
        Self::from_toml(&std::fs::read_to_string(path)?)?
      }
      None => {
        crate::log_println!("No config.toml found, using built-in defaults");
        Self::default()
      }
    };

    config.apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
  }

  pub fn from_toml(raw: &str) -> AnyResult<Self> {
    Ok(toml::from_str(raw)?)
  }

  /// `TMDB_API_KEY`, `HOST` and `PORT` win over the file.
  pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(key) = lookup("TMDB_API_KEY").filter(|k| !k.trim().is_empty()) {
      self.tmdb.api_key = Some(key);
    }
    if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
      self.server.host = host;
    }
    if let Some(port) = lookup("PORT").and_then(|p| p.trim().parse::<u16>().ok()) {
      self.server.port = port;
    }
  }

  pub fn tmdb_api_key(&self) -> Option<&str> {
    self
      .tmdb
      .api_key
      .as_deref()
      .map(str::trim)
      .filter(|k| !k.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_file_uses_defaults() {
    let config = Config::from_toml("").expect("empty config should parse");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.tmdb.api_base, "https://api.themoviedb.org/3");
    assert_eq!(config.embed.base_url, "https://vidsrc.xyz/embed");
    assert_eq!(config.embed.fallback_domain, "https://cloudnestra.com");
    assert_eq!(config.embed.max_concurrent_servers, 4);
    assert!(config.tmdb_api_key().is_none());
    assert!(config.logging.is_none());
  }

  #[test]
  fn test_partial_sections() {
    let raw = r#"
      [server]
      port = 8080

      [tmdb]
      api_key = "abc"

      [logging]
      level = "debug"

      [logging.file]
      path = "./logs/vidrelay.log"
    "#;
    let config = Config::from_toml(raw).expect("config should parse");

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.tmdb_api_key(), Some("abc"));
    let logging = config.logging.expect("logging section");
    assert_eq!(logging.level.as_deref(), Some("debug"));
    assert_eq!(logging.file.expect("file section").max_lines, 10_000);
  }

  #[test]
  fn test_env_overrides() {
    let mut config = Config::default();
    config.apply_overrides(|key| match key {
      "TMDB_API_KEY" => Some("from-env".to_string()),
      "PORT" => Some("4123".to_string()),
      _ => None,
    });

    assert_eq!(config.tmdb_api_key(), Some("from-env"));
    assert_eq!(config.server.port, 4123);
    assert_eq!(config.server.host, "0.0.0.0");
  }

  #[test]
  fn test_invalid_port_override_is_ignored() {
    let mut config = Config::default();
    config.apply_overrides(|key| (key == "PORT").then(|| "not-a-port".to_string()));
    assert_eq!(config.server.port, 3000);
  }

  #[test]
  fn test_blank_api_key_counts_as_missing() {
    let mut config = Config::default();
    config.tmdb.api_key = Some("   ".to_string());
    assert!(config.tmdb_api_key().is_none());
  }
}
