use std::time::Duration;

use reqwest::{
    Client, Error,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::{common::user_agent::random_user_agent, configs::HttpConfig};

const ACCEPT_ANY: &str = "*/*";
const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.9";

pub struct HttpClient;

impl HttpClient {
    /// Client for TMDB and the embed site. Every request is bounded by `timeout_secs`.
    pub fn scraping(config: &HttpConfig) -> Result<Client, Error> {
        Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
    }

    /// Client for relaying media. No total timeout, only connect and idle budgets,
    /// and no transparent decompression so lengths and ranges pass through untouched.
    pub fn streaming(config: &HttpConfig) -> Result<Client, Error> {
        Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.stream_read_timeout_secs))
            .no_gzip()
            .no_deflate()
            .build()
    }

    /// Headers that make a request look like a browser loading the player iframe.
    /// A fresh user agent is drawn per call.
    pub fn iframe_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_ANY));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));
        headers.insert(USER_AGENT, HeaderValue::from_static(random_user_agent()));
        headers.insert("sec-fetch-dest", HeaderValue::from_static("iframe"));
        headers.insert("sec-fetch-mode", HeaderValue::from_static("no-cors"));
        headers.insert("sec-fetch-site", HeaderValue::from_static("same-origin"));
        headers
    }

    /// Headers for pulling media bytes on behalf of a player.
    pub fn media_headers(referer: &str, range: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(random_user_agent()));
        if let Ok(v) = HeaderValue::from_str(referer) {
            headers.insert(reqwest::header::REFERER, v);
        }
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_ANY));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));
        if let Ok(v) = HeaderValue::from_str(range) {
            headers.insert(reqwest::header::RANGE, v);
        }
        headers
    }
}
