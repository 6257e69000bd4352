//! Lawbook core.
//!
//! This crate holds everything about a law submission that does not depend on
//! HTTP or on a particular database:
//! - The [`Law`] data model and the fixed [`Category`] enumeration
//! - Input validation and sanitization of submitted form fields
//! - The [`LawStore`] persistence seam
//! - The submission flow tying validation and persistence together

pub mod error;
pub mod law;
pub mod sanitize;
pub mod store;
pub mod submission;
pub mod validate;

pub use error::{PersistenceError, SubmissionError, ValidationError};
pub use law::{Category, Law, ValidatedLaw};
pub use sanitize::sanitize_text;
pub use store::LawStore;
pub use submission::{process_submission, LawForm};
pub use validate::{validate_submission, MAX_LAW_TEXT_CHARS};
