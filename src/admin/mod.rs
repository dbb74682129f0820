//! Read-only diagnostic endpoint.
//!
//! Serves the collected route inventory; it never dispatches to the
//! application's own handlers.

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::output::RouteInventory;
use self::handlers::*;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Failed to bind admin endpoint on {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Admin endpoint failed: {0}")]
    Serve(#[from] std::io::Error),
}

pub fn setup_admin_router(inventory: RouteInventory) -> Router {
    let state = AdminState {
        inventory: Arc::new(inventory),
    };

    Router::new()
        .route("/admin/status", get(get_status))
        .route("/admin/routes", get(get_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is interrupted.
pub async fn serve(bind_address: &str, inventory: RouteInventory) -> Result<(), AdminError> {
    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(|source| AdminError::Bind {
            addr: bind_address.to_string(),
            source,
        })?;
    let local_addr: SocketAddr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        routes = inventory.len(),
        "Admin endpoint listening"
    );

    axum::serve(listener, setup_admin_router(inventory))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;
    Ok(())
}
