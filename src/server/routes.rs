// src/server/routes.rs
//! Axum router configuration for the cookbook server

use crate::server::handlers::{admin, entries, parse, summary};
use crate::server::{ServerConfig, ServerState};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_router(state: Arc<RwLock<ServerState>>, config: &ServerConfig) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Catalog operations
        .route("/parse", post(parse::parse_name))
        .route("/entry", post(entries::create_entry))
        .route("/summary", get(summary::get_summary))
        // Admin endpoints
        .route("/v1/admin/stats", get(admin::stats))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(&config.cors_allowed_origins));

    if config.enable_request_log {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// CORS configuration: any origin unless an allow-list is configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app(config: ServerConfig) -> Router {
        let state = Arc::new(RwLock::new(ServerState::new(config.clone())));
        create_router(state, &config)
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app(ServerConfig::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_body_limit() {
        let config = ServerConfig {
            max_body_bytes: 16,
            ..ServerConfig::default()
        };
        let body = format!(r#"{{"input": "{}"}}"#, "a".repeat(64));

        let response = app(config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/parse")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_cors_allow_list() {
        let config = ServerConfig {
            cors_allowed_origins: vec!["https://kitchen.example".to_string()],
            ..ServerConfig::default()
        };

        let response = app(config)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "https://kitchen.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "https://kitchen.example"
        );
    }
}
