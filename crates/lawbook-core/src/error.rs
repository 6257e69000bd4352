//! Core error types.

use thiserror::Error;

/// A submitted field failed validation.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Law text was empty or too long after trimming.
    #[error("Law text is required and must be less than 500 characters.")]
    LawText,

    /// Category was empty or not one of the known categories.
    #[error("Please select a valid category.")]
    Category,
}

/// The store could not persist or read a law.
///
/// The `Display` text is the raw detail reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// No connection to the store could be obtained.
    #[error("{0}")]
    Unavailable(String),

    /// The statement was rejected or failed while executing.
    #[error("{0}")]
    Statement(String),

    /// A stored row could not be decoded into a law.
    #[error("{0}")]
    Decode(String),
}

/// Why a submission did not result in a stored law.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The input was rejected before any persistence attempt.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The input was valid but the store failed.
    #[error("Error adding law: {0}")]
    Persistence(#[from] PersistenceError),
}
