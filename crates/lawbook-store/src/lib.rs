//! Lawbook persistence gateway.
//!
//! [`SqliteLawStore`] implements [`lawbook_core::LawStore`] on top of an sqlx
//! SQLite connection pool.

pub mod config;
pub mod error;
pub mod sqlite;

pub use config::StoreConfig;
pub use error::StoreError;
pub use sqlite::SqliteLawStore;
