use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
  pub level: Option<String>,
  pub filters: Option<String>,
  pub file: Option<FileLoggingConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FileLoggingConfig {
  pub path: String,
  #[serde(default = "default_max_lines")]
  pub max_lines: u32,
}

fn default_max_lines() -> u32 {
  10_000
}
