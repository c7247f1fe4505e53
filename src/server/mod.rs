// src/server/mod.rs
//! Cookbook HTTP server
//!
//! Thin HTTP + JSON transport over the catalog:
//! - `POST /parse` normalizes a handwritten name
//! - `POST /entry` validates and inserts a recipe or ingredient
//! - `GET /summary?name=` resolves a recipe into cook time and ingredients
//!
//! The catalog lives in a single [`ServerState`] behind a reader-writer lock,
//! so summaries resolve concurrently while insertions are exclusive.

pub mod config;
mod handlers;
pub mod metrics;
mod routes;

pub use config::CookbookConfig;
pub use metrics::{MetricsSnapshot, ServerMetrics};
pub use routes::create_router;

use crate::catalog::Catalog;
use anyhow::{Context, Result};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default request body limit (64 KiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Seed file loaded into the catalog at startup
    pub seed_path: Option<PathBuf>,
    /// CORS allowed origins (empty = any origin)
    pub cors_allowed_origins: Vec<String>,
    /// Maximum accepted request body size
    pub max_body_bytes: usize,
    /// Log every request through the tracing layer
    pub enable_request_log: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            seed_path: None,
            cors_allowed_origins: Vec::new(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            enable_request_log: true,
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub catalog: Catalog,
    /// Metrics collector
    pub metrics: Arc<ServerMetrics>,
}

impl ServerState {
    /// State with an empty catalog
    pub fn new(config: ServerConfig) -> Self {
        Self::with_catalog(config, Catalog::new())
    }

    pub fn with_catalog(config: ServerConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            metrics: Arc::new(ServerMetrics::new()),
        }
    }
}

/// Start the cookbook server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting cookbook server on {}", config.bind_addr);

    let catalog = match &config.seed_path {
        Some(path) => {
            tracing::info!("Seeding catalog from {}", path.display());
            Catalog::from_seed_file(path)?
        }
        None => Catalog::new(),
    };

    let app = create_router(
        Arc::new(RwLock::new(ServerState::with_catalog(config.clone(), catalog))),
        &config,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Cookbook is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
