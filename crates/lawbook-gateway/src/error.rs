//! Error handling for the gateway.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use lawbook_core::SubmissionError;

use crate::view::render_form_page;
use crate::FORM_PATH;

/// Application error type.
///
/// Every variant renders the form again with its message above it.
#[derive(Debug)]
pub enum AppError {
    /// Submitted fields were rejected.
    Invalid(String),
    /// The store failed to add the law.
    Store(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Invalid(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Html(render_form_page(FORM_PATH, Some(&message)))).into_response()
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Validation(_) => AppError::Invalid(err.to_string()),
            SubmissionError::Persistence(_) => AppError::Store(err.to_string()),
        }
    }
}
