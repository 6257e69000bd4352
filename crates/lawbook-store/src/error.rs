//! Store error types.

use lawbook_core::PersistenceError;
use thiserror::Error;

/// Errors raised while opening or preparing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database URL could not be parsed.
    #[error("invalid database url: {0}")]
    InvalidUrl(String),

    /// The pool could not connect to the database.
    #[error("connection error: {0}")]
    Connect(#[source] sqlx::Error),

    /// The schema could not be created.
    #[error("schema error: {0}")]
    Schema(#[source] sqlx::Error),
}

/// Map a failure to obtain a pooled connection.
pub(crate) fn unavailable(err: sqlx::Error) -> PersistenceError {
    PersistenceError::Unavailable(err.to_string())
}

/// Map a failure while executing a statement.
pub(crate) fn statement(err: sqlx::Error) -> PersistenceError {
    PersistenceError::Statement(err.to_string())
}
