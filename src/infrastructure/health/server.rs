use axum::{Router, http::StatusCode, routing::get};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Liveness routes for uptime monitors: `GET /health` answers `OK`, every
/// other path is a plain-text 404.
pub fn health_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(not_found)
}

/// Binds the listener and serves the health routes on their own task.
/// Shares nothing with the gateway side; abort the handle to close it.
pub async fn spawn_health_server(port: u16) -> std::io::Result<JoinHandle<()>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("Health server listening on {}", listener.local_addr()?);

    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_router()).await {
            error!("Health server stopped: {}", e);
        }
    }))
}
