//! JSON HTTP surface over the [`Container`] use cases.

mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use tracing::info;

use crate::connector::api::Container;

pub use error::ApiError;
pub use handlers::*;

pub fn app(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/health", get(handlers::health))
        .route("/generate", post(handlers::generate))
        .route("/chat", post(handlers::chat))
        .route("/history", get(handlers::history))
        .route("/history/clear", post(handlers::clear_history))
        .with_state(container)
}

/// Serve until Ctrl-C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(container))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
