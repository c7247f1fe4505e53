// src/server/handlers/mod.rs
//! HTTP request handlers for the cookbook server
//!
//! Every rejected request is answered with `400 Bad Request` and a plain-text
//! reason. A rejected request never changes the catalog.

pub mod admin;
pub mod entries;
pub mod parse;
pub mod summary;

use crate::error::Error;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// Answer a request whose body is not the expected JSON
fn bad_json(rejection: JsonRejection) -> Response {
    let reason = rejection.body_text();
    tracing::warn!("Rejected malformed request body: {}", reason);
    (StatusCode::BAD_REQUEST, reason).into_response()
}
