//! Store configuration.

use std::time::Duration;

/// Default database location.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://lawbook.db";

/// Default maximum number of pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default timeout when acquiring a pooled connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`SqliteLawStore`](crate::SqliteLawStore).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database URL (e.g., "sqlite://lawbook.db" or "sqlite::memory:").
    pub database_url: String,

    /// Maximum number of pooled connections.
    pub max_connections: u32,

    /// Timeout when acquiring a pooled connection.
    pub acquire_timeout: Duration,

    /// Create the database file when it does not exist.
    pub create_if_missing: bool,
}

impl StoreConfig {
    /// Create a configuration for the given database URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            create_if_missing: true,
        }
    }

    /// Set the maximum number of pooled connections.
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max.max(1);
        self
    }

    /// Set the connection acquire timeout.
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Set whether a missing database file is created.
    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}
