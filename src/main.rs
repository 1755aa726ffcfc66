use std::sync::Arc;

use tracing::info;
use vidrelay::{
    common::{banner, logger, types::AnyResult},
    configs::Config,
    server::AppState,
    transport,
};

#[tokio::main]
async fn main() -> AnyResult<()> {
    let config = Config::load()?;
    logger::init(&config);
    banner::print_banner(&banner::BuildInfo::default());

    let address = (config.server.host.clone(), config.server.port);
    let shared_state = Arc::new(AppState::new(config)?);
    let app = transport::http_server::router(shared_state);

    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
