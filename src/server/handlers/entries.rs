// src/server/handlers/entries.rs
//! Catalog insertion endpoint

use super::bad_json;
use crate::catalog::NewEntry;
use crate::error::Error;
use crate::server::ServerState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// POST /entry
///
/// Validates and inserts a recipe or ingredient. Answers `200` with an empty
/// body on success.
pub async fn create_entry(
    State(state): State<Arc<RwLock<ServerState>>>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> Response {
    let Json(entry) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            state.read().await.metrics.record_entry_rejected();
            return bad_json(rejection);
        }
    };

    let label = entry
        .name
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    let mut state_guard = state.write().await;
    match state_guard.catalog.insert(entry) {
        Ok(()) => {
            state_guard.metrics.record_entry_created();
            info!("Added entry {}", label);
            StatusCode::OK.into_response()
        }
        Err(e) => {
            state_guard.metrics.record_entry_rejected();
            warn!("Rejected entry {}: {}", label, e);
            Error::from(e).into_response()
        }
    }
}
