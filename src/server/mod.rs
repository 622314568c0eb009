//! Smart-link HTTP server.
//!
//! Routes:
//! - `/health` - liveness probe
//! - `/api/debug`, `/debug` - routing introspection (debug mode only)
//! - anything else - the smart-link redirect
//!
//! Handlers are stateless apart from the read-only [`AppState`] and can run
//! in parallel without locking.

mod handlers;
mod response;
mod types;

use std::future::Future;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::error_handling::InitializationError;
use handlers::{debug_handler, health_handler, redirect_handler};
pub use response::{page_response, redirect_response};
pub use types::{AppState, DebugHeaders, DebugResponse};

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/debug", get(debug_handler))
        .route("/debug", get(debug_handler))
        .fallback(redirect_handler)
        .with_state(state)
}

/// Binds `addr` and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn start_server(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| InitializationError::ServerBindError {
            addr: addr.to_string(),
            source,
        })?;

    serve(listener, state, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` completes.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    log::info!("Smart-link server listening on http://{}/", local_addr);
    if state.config.debug {
        log::warn!("Debug endpoint enabled at http://{}/api/debug", local_addr);
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown signal received, draining connections"),
        Err(e) => {
            log::warn!("Failed to listen for Ctrl-C ({}); running until killed", e);
            std::future::pending::<()>().await;
        }
    }
}
