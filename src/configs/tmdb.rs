use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TmdbConfig {
  /// Required for every lookup. Usually supplied through `TMDB_API_KEY`.
  #[serde(default)]
  pub api_key: Option<String>,
  #[serde(default = "default_api_base")]
  pub api_base: String,
}

impl Default for TmdbConfig {
  fn default() -> Self {
    Self {
      api_key: None,
      api_base: default_api_base(),
    }
  }
}

fn default_api_base() -> String {
  "https://api.themoviedb.org/3".to_string()
}
