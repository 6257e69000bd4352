//! Law data model.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Jurisdiction a law belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Federal Iraqi law.
    Iraq,
    /// Law of the Kurdistan Region.
    Kurdistan,
}

impl Category {
    /// Every category, in the order they are offered on the form.
    pub const ALL: [Category; 2] = [Category::Iraq, Category::Kurdistan];

    /// The name used on the form and in the store.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Iraq => "Iraq",
            Category::Kurdistan => "Kurdistan",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Matches the exact, case-sensitive category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(ValidationError::Category)
    }
}

/// A law that passed validation and is ready to be stored.
///
/// Only the validator hands these out, so every value satisfies the field
/// constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLaw {
    law_text: String,
    category: Category,
}

impl ValidatedLaw {
    pub(crate) fn new(law_text: String, category: Category) -> Self {
        Self { law_text, category }
    }

    /// The trimmed law text.
    pub fn law_text(&self) -> &str {
        &self.law_text
    }

    /// The selected category.
    pub fn category(&self) -> Category {
        self.category
    }
}

/// A law as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Law {
    /// Row identifier assigned by the store.
    pub id: i64,
    /// Law text as it was persisted.
    pub law_text: String,
    /// Category tag.
    pub category: Category,
    /// Insertion time assigned by the store.
    pub creation_date: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn test_category_is_case_sensitive() {
        assert_eq!("iraq".parse::<Category>(), Err(ValidationError::Category));
        assert_eq!("KURDISTAN".parse::<Category>(), Err(ValidationError::Category));
        assert_eq!("".parse::<Category>(), Err(ValidationError::Category));
    }

    #[test]
    fn test_category_form_order() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Iraq", "Kurdistan"]);
    }
}
