use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmbedConfig {
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Origin used for the rcp/prorcp hops when the embed page carries no iframe source.
  #[serde(default = "default_fallback_domain")]
  pub fallback_domain: String,
  #[serde(default = "default_max_concurrent_servers")]
  pub max_concurrent_servers: usize,
}

impl Default for EmbedConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
      fallback_domain: default_fallback_domain(),
      max_concurrent_servers: default_max_concurrent_servers(),
    }
  }
}

fn default_base_url() -> String {
  "https://vidsrc.xyz/embed".to_string()
}

fn default_fallback_domain() -> String {
  "https://cloudnestra.com".to_string()
}

fn default_max_concurrent_servers() -> usize {
  4
}
