//! Shared harness: boots the router on an ephemeral port with TMDB and the
//! embed site both stubbed by one [`MockServer`].

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use serde_json::json;
use vidrelay::{configs::Config, server::AppState, transport::http_server::router};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const API_KEY: &str = "test-key";

pub struct TestHarness {
    pub upstream: MockServer,
    pub addr: SocketAddr,
}

impl TestHarness {
    pub async fn start() -> Self {
        Self::with_api_key(Some(API_KEY)).await
    }

    pub async fn with_api_key(api_key: Option<&str>) -> Self {
        let upstream = MockServer::start().await;
        let config = test_config(&upstream.uri(), api_key);
        let app = router(Arc::new(AppState::new(config).expect("state should build")));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { upstream, addr }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// `http://127.0.0.1:<port>` of the mock, which doubles as the redirect origin.
    pub fn origin(&self) -> String {
        self.upstream.uri()
    }

    pub async fn mock_tmdb_details(&self, kind: &str, tmdb_id: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/3/{}/{}", kind, tmdb_id)))
            .and(query_param("api_key", API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.upstream)
            .await;
    }

    pub async fn mock_tmdb_imdb(&self, kind: &str, tmdb_id: &str, imdb_id: &str) {
        self.mock_tmdb_details(
            kind,
            tmdb_id,
            json!({ "id": tmdb_id, "external_ids": { "imdb_id": imdb_id } }),
        )
        .await;
    }

    pub async fn mock_embed(&self, embed_path: &str, html: String) {
        Mock::given(method("GET"))
            .and(path(format!("/embed/{}", embed_path)))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(&self.upstream)
            .await;
    }

    /// Mounts `rcp/{token}` → `prorcp/{inner}` → `file_url`.
    pub async fn mock_chain(&self, token: &str, inner: &str, file_url: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/rcp/{}", token)))
            .respond_with(ResponseTemplate::new(200).set_body_string(rcp_page(inner)))
            .mount(&self.upstream)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/prorcp/{}", inner)))
            .respond_with(ResponseTemplate::new(200).set_body_string(prorcp_page(file_url)))
            .mount(&self.upstream)
            .await;
    }

    /// Embed page whose iframe points back at the mock and lists `tokens`.
    pub fn embed_page(&self, tokens: &[&str]) -> String {
        embed_page_with_iframe(&format!("{}/rcp/{}", self.origin(), tokens.first().unwrap_or(&"")), tokens)
    }
}

pub fn test_config(upstream: &str, api_key: Option<&str>) -> Config {
    let mut config = Config::default();
    config.tmdb.api_base = format!("{}/3", upstream);
    config.tmdb.api_key = api_key.map(str::to_string);
    config.embed.base_url = format!("{}/embed", upstream);
    config.embed.fallback_domain = upstream.to_string();
    config.http.timeout_secs = 5;
    config.http.connect_timeout_secs = 2;
    config
}

pub fn embed_page_with_iframe(iframe_src: &str, tokens: &[&str]) -> String {
    let servers: String = tokens
        .iter()
        .map(|t| format!(r#"<div class="server" data-hash="{}">Server</div>"#, t))
        .collect();
    format!(
        r#"<!doctype html><html><head><title>embed</title></head><body>
<iframe id="player_iframe" src="{}" frameborder="0" allowfullscreen></iframe>
<div class="serversList">{}</div>
</body></html>"#,
        iframe_src, servers
    )
}

pub fn rcp_page(inner: &str) -> String {
    format!(
        "<html><body><script>$('#pl_but').click(function() {{ loadIframe({{ src: '/prorcp/{}' }}); }});</script></body></html>",
        inner
    )
}

pub fn prorcp_page(file_url: &str) -> String {
    format!(
        "<html><body><script>var player = new Playerjs({{id:'player_parent', file: '{}', cuid:'x'}});</script></body></html>",
        file_url
    )
}
