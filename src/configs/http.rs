use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
  /// Total budget for a single scraping request (TMDB, embed page, rcp, prorcp).
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
  #[serde(default = "default_connect_timeout_secs")]
  pub connect_timeout_secs: u64,
  /// Idle budget between chunks while relaying a stream.
  #[serde(default = "default_stream_read_timeout_secs")]
  pub stream_read_timeout_secs: u64,
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      timeout_secs: default_timeout_secs(),
      connect_timeout_secs: default_connect_timeout_secs(),
      stream_read_timeout_secs: default_stream_read_timeout_secs(),
    }
  }
}

fn default_timeout_secs() -> u64 {
  15
}

fn default_connect_timeout_secs() -> u64 {
  10
}

fn default_stream_read_timeout_secs() -> u64 {
  60
}
