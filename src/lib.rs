//! Resolves TMDB titles into directly playable streams behind a third-party
//! embed site, and relays those streams with the headers the host expects.

pub mod common;
pub mod configs;
pub mod protocol;
pub mod proxy;
pub mod resolver;
pub mod server;
pub mod transport;
