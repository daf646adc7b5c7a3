pub mod app_state;

use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use tracing::info;

pub use app_state::AppState;

use crate::common::AnyResult;

pub fn app(state: Arc<AppState>) -> Router {
    crate::rest::router()
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(state: Arc<AppState>) -> AnyResult<()> {
    let address: SocketAddr =
        format!("{}:{}", state.config.server.host, state.config.server.port).parse()?;

    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Stream resolver listening on {}", address);

    axum::serve(listener, app(state))
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
