//! Input validation for submitted laws.
//!
//! Both fields are checked on every submission. When both fail, the category
//! error is the one reported.

use crate::error::ValidationError;
use crate::law::{Category, ValidatedLaw};

/// Maximum law text length, in characters, after trimming.
pub const MAX_LAW_TEXT_CHARS: usize = 500;

/// Characters stripped from both ends of a submitted field.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Validate the raw form fields and return the normalized law.
pub fn validate_submission(
    law_text: &str,
    category: &str,
) -> Result<ValidatedLaw, ValidationError> {
    let law_text = law_text.trim_matches(TRIMMED);
    let category = category.trim_matches(TRIMMED);

    let text_ok = law_text_fits(law_text);
    let category = category.parse::<Category>();

    match (text_ok, category) {
        (_, Err(err)) => Err(err),
        (false, Ok(_)) => Err(ValidationError::LawText),
        (true, Ok(category)) => Ok(ValidatedLaw::new(law_text.to_string(), category)),
    }
}

/// Whether `law_text` is non-empty and within [`MAX_LAW_TEXT_CHARS`].
pub(crate) fn law_text_fits(law_text: &str) -> bool {
    !law_text.is_empty() && law_text.chars().count() <= MAX_LAW_TEXT_CHARS
}
