// src/server/handlers/parse.rs
//! Name normalization endpoint

use super::bad_json;
use crate::normalize::normalize_name;
use crate::server::ServerState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Request body for name normalization
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Handwritten name
    #[serde(default)]
    pub input: String,
}

/// Normalized name
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// POST /parse
pub async fn parse_name(
    State(state): State<Arc<RwLock<ServerState>>>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response {
    let metrics = Arc::clone(&state.read().await.metrics);

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            metrics.record_name_rejected();
            return bad_json(rejection);
        }
    };

    match normalize_name(&request.input) {
        Ok(msg) => {
            metrics.record_name_parsed();
            (StatusCode::OK, Json(ParseResponse { msg })).into_response()
        }
        Err(e) => {
            metrics.record_name_rejected();
            tracing::warn!("{}", e);
            e.into_response()
        }
    }
}
