pub mod base;
pub mod embed;
pub mod http;
pub mod logging;
pub mod server;
pub mod tmdb;

pub use base::*;
pub use embed::*;
pub use http::*;
pub use logging::*;
pub use server::*;
pub use tmdb::*;
