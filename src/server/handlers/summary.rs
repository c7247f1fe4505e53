// src/server/handlers/summary.rs
//! Recipe summary endpoint

use crate::error::Error;
use crate::resolver::resolve;
use crate::server::ServerState;
use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Query parameters for summary requests
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Recipe to resolve
    pub name: Option<String>,
}

/// GET /summary?name=
///
/// Returns the recipe's total cook time and base ingredients, or `400` if the
/// name is not a recipe or the recipe cannot be fully resolved.
pub async fn get_summary(
    State(state): State<Arc<RwLock<ServerState>>>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let name = query.name.unwrap_or_default();
    let state_guard = state.read().await;

    match resolve(&state_guard.catalog, &name) {
        Ok(summary) => {
            state_guard.metrics.record_summary_served();
            Json(summary).into_response()
        }
        Err(e) => {
            state_guard.metrics.record_summary_failed();
            tracing::warn!("Summary for '{}' failed: {}", name, e);
            Error::from(e).into_response()
        }
    }
}
