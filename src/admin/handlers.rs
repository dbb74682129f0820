use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::output::RouteInventory;

/// Shared, read-only admin state.
#[derive(Clone)]
pub struct AdminState {
    pub inventory: Arc<RouteInventory>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemStatus {
    pub version: String,
    pub status: String,
    pub route_count: usize,
    pub complex_count: usize,
}

pub async fn get_status(State(state): State<AdminState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
        route_count: state.inventory.len(),
        complex_count: state.inventory.complex_count(),
    })
}

pub async fn get_routes(State(state): State<AdminState>) -> Json<Vec<String>> {
    Json(state.inventory.routes.clone())
}
