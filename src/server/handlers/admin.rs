// src/server/handlers/admin.rs
//! Admin endpoints

use crate::server::{MetricsSnapshot, ServerState};
use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Serialize)]
pub struct CatalogStats {
    pub entries: usize,
    pub recipes: usize,
    pub ingredients: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub metrics: MetricsSnapshot,
    pub catalog: CatalogStats,
}

/// GET /v1/admin/stats
pub async fn stats(State(state): State<Arc<RwLock<ServerState>>>) -> Json<StatsResponse> {
    let state_guard = state.read().await;
    let counts = state_guard.catalog.counts();

    Json(StatsResponse {
        metrics: state_guard.metrics.snapshot(),
        catalog: CatalogStats {
            entries: state_guard.catalog.len(),
            recipes: counts.recipes,
            ingredients: counts.ingredients,
        },
    })
}
