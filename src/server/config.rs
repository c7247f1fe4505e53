// src/server/config.rs
//! Configuration file parsing for the cookbook server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address, request logging
//! - [catalog] - Seed file loaded at startup
//! - [security] - CORS origins, request body limit

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct CookbookConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Security settings
    #[serde(default)]
    pub security: SecuritySection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Public API bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Log every HTTP request
    #[serde(default = "default_true")]
    pub request_log: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            request_log: true,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_true() -> bool {
    true
}

/// Catalog configuration section
#[derive(Debug, Default, Deserialize)]
pub struct CatalogSection {
    /// Seed file with entries to insert at startup
    #[serde(default)]
    pub seed: Option<PathBuf>,
}

/// Security configuration section
#[derive(Debug, Deserialize)]
pub struct SecuritySection {
    /// CORS allowed origins (empty = any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Maximum request body size (e.g., "64KB", "1MB")
    #[serde(default = "default_max_body_size")]
    pub max_body_size: String,
}

impl Default for SecuritySection {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            max_body_size: default_max_body_size(),
        }
    }
}

fn default_max_body_size() -> String {
    "64KB".to_string()
}

impl CookbookConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CookbookConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        let max_body = parse_size(&self.security.max_body_size)
            .context("Invalid security.max_body_size")?;
        if max_body == 0 {
            anyhow::bail!("security.max_body_size must be greater than zero");
        }

        Ok(())
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;
        let max_body_bytes = usize::try_from(parse_size(&self.security.max_body_size)?)
            .context("security.max_body_size does not fit in memory")?;

        Ok(ServerConfig {
            bind_addr,
            seed_path: self.catalog.seed.clone(),
            cors_allowed_origins: self.security.cors_origins.clone(),
            max_body_bytes,
            enable_request_log: self.server.request_log,
        })
    }
}

/// Parse a human-readable size string (e.g., "64KB", "1MB", "512B")
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(num) = s.strip_suffix("GB") {
        (num, 1024u64 * 1024 * 1024)
    } else if let Some(num) = s.strip_suffix("MB") {
        (num, 1024u64 * 1024)
    } else if let Some(num) = s.strip_suffix("KB") {
        (num, 1024u64)
    } else if let Some(num) = s.strip_suffix('B') {
        (num, 1u64)
    } else {
        // Assume bytes
        (s.as_str(), 1u64)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid size number: {}", num_str))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Size too large: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1024").unwrap(), 1024);
        assert_eq!(parse_size("512B").unwrap(), 512);
        assert_eq!(parse_size("64KB").unwrap(), 64 * 1024);
        assert_eq!(parse_size("1mb").unwrap(), 1024 * 1024);
        assert_eq!(parse_size(" 2GB ").unwrap(), 2 * 1024 * 1024 * 1024);
        assert!(parse_size("lots").is_err());
        assert!(parse_size("1.5MB").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = CookbookConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind, "0.0.0.0:8080");

        let server = config.to_server_config().unwrap();
        assert_eq!(server.bind_addr.port(), 8080);
        assert_eq!(server.max_body_bytes, crate::server::DEFAULT_MAX_BODY_BYTES);
        assert!(server.seed_path.is_none());
        assert!(server.enable_request_log);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[server]
bind = "127.0.0.1:9090"
request_log = false

[catalog]
seed = "/srv/cookbook/catalog.toml"

[security]
cors_origins = ["https://kitchen.example"]
max_body_size = "1MB"
"#;
        let config: CookbookConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        let server = config.to_server_config().unwrap();
        assert_eq!(server.bind_addr, "127.0.0.1:9090".parse::<SocketAddr>().unwrap());
        assert!(!server.enable_request_log);
        assert_eq!(
            server.seed_path,
            Some(PathBuf::from("/srv/cookbook/catalog.toml"))
        );
        assert_eq!(server.cors_allowed_origins, vec!["https://kitchen.example"]);
        assert_eq!(server.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn test_invalid_bind() {
        let toml_str = r#"
[server]
bind = "not-an-address"
"#;
        let config: CookbookConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_body_limit_rejected() {
        let toml_str = r#"
[security]
max_body_size = "0KB"
"#;
        let config: CookbookConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookbook.toml");
        std::fs::write(&path, "[server]\nbind = \"127.0.0.1:8181\"\n").unwrap();

        let config = CookbookConfig::load(&path).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8181");

        let missing = CookbookConfig::load(&dir.path().join("missing.toml"));
        assert!(missing.is_err());
    }
}
