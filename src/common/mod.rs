pub mod banner;
pub mod errors;
pub mod http;
pub mod logger;
pub mod types;
pub mod user_agent;

pub use errors::*;
pub use http::*;
pub use types::*;
