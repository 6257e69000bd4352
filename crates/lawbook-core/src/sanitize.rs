//! Text sanitization applied to validated input before it is stored.
//!
//! Markup tags and NUL characters are removed, and quote characters are
//! replaced with numeric character references.

use crate::error::ValidationError;
use crate::law::ValidatedLaw;
use crate::validate::law_text_fits;

/// Strip tags and encode quotes in `input`.
///
/// A `<` opens a tag only when followed by a non-whitespace character; an
/// unterminated tag swallows the rest of the input.
pub fn sanitize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_tag = false;

    while let Some(c) = chars.next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }

        match c {
            '<' => match chars.peek() {
                Some(next) if !next.is_whitespace() => in_tag = true,
                _ => out.push('<'),
            },
            '\0' => {}
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(c),
        }
    }

    out
}

impl ValidatedLaw {
    /// Return this law with its text sanitized for storage.
    ///
    /// The sanitized text is checked again: markup-only text comes out empty
    /// and encoded quotes can push it past the length limit.
    pub fn sanitized(self) -> Result<ValidatedLaw, ValidationError> {
        let law_text = sanitize_text(self.law_text());
        if !law_text_fits(&law_text) {
            return Err(ValidationError::LawText);
        }
        Ok(ValidatedLaw::new(law_text, self.category()))
    }
}
