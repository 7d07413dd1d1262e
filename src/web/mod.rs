//! HTTP rendering surface: each request builds fresh criteria from its query
//! string and re-runs the pipeline over the shared catalog.

pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod templates;

pub use router::app_router;
pub use state::AppState;

use std::net::SocketAddr;
use tracing::info;

use crate::error::Result;

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = app_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Web server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
