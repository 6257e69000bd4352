//! Gateway configuration.

use std::time::Duration;

use clap::Parser;
use lawbook_store::config::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
use lawbook_store::StoreConfig;
use thiserror::Error;

use crate::{FORM_PATH, HEALTH_PATH};

/// Default address to listen on.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Default path of the confirmation page.
pub const DEFAULT_SUCCESS_PATH: &str = "/laws/success";

/// Lawbook gateway command line arguments.
#[derive(Debug, Parser)]
#[command(name = "lawbook-gateway")]
#[command(version, about = "Lawbook - add laws through an HTML form")]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, env = "LAWBOOK_LISTEN", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: String,

    /// Database URL of the law store.
    #[arg(short, long, env = "LAWBOOK_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "LAWBOOK_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Timeout (ms) when acquiring a pooled connection.
    #[arg(long, env = "LAWBOOK_ACQUIRE_TIMEOUT_MS", default_value_t = 30_000)]
    pub acquire_timeout_ms: u64,

    /// Path the browser is redirected to after a law is added.
    #[arg(long, env = "LAWBOOK_SUCCESS_PATH", default_value = DEFAULT_SUCCESS_PATH)]
    pub success_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LAWBOOK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Invalid gateway configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The confirmation path is unusable.
    #[error("invalid success path {0:?}: must start with '/' and not be a reserved path")]
    InvalidSuccessPath(String),
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Database URL of the law store.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub max_connections: u32,
    /// Timeout when acquiring a pooled connection.
    pub acquire_timeout: Duration,
    /// Confirmation page path.
    pub success_path: String,
}

impl GatewayConfig {
    /// Check settings that clap cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reserved = [FORM_PATH, HEALTH_PATH].contains(&self.success_path.as_str());
        if !self.success_path.starts_with('/') || reserved {
            return Err(ConfigError::InvalidSuccessPath(self.success_path.clone()));
        }
        Ok(())
    }

    /// Store settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.database_url)
            .with_max_connections(self.max_connections)
            .with_acquire_timeout(self.acquire_timeout)
    }

    /// Set the confirmation page path.
    pub fn with_success_path(mut self, path: impl Into<String>) -> Self {
        self.success_path = path.into();
        self
    }
}

impl From<&Args> for GatewayConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: args.listen.clone(),
            database_url: args.database_url.clone(),
            max_connections: args.max_connections,
            acquire_timeout: Duration::from_millis(args.acquire_timeout_ms),
            success_path: args.success_path.clone(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(30),
            success_path: DEFAULT_SUCCESS_PATH.to_string(),
        }
    }
}
