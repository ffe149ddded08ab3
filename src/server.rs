//! HTTP server initialization and runtime setup.
//!
//! Handles backend client setup and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::backend::HttpShortenApi;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Backend HTTP client for `{API_BASE_URL}/shorten`
/// - Shared application state
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The backend client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let api = HttpShortenApi::new(&config.api_base_url)?;
    tracing::info!("Backend endpoint: {}", api.endpoint());

    let state = AppState::new(Arc::new(api), &config.api_base_url)
        .with_public_origin(config.public_origin.as_deref())
        .with_behind_proxy(config.behind_proxy);

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
