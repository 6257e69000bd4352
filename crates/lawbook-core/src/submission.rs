//! Submission flow: validate, sanitize, persist.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::SubmissionError;
use crate::law::ValidatedLaw;
use crate::store::LawStore;
use crate::validate::validate_submission;

/// Raw form fields as submitted.
///
/// A field missing from the request is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LawForm {
    /// Submitted law text.
    #[serde(default)]
    pub law_text: String,
    /// Submitted category name.
    #[serde(default)]
    pub category: String,
}

impl LawForm {
    /// Create a form from field values.
    pub fn new(law_text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            law_text: law_text.into(),
            category: category.into(),
        }
    }
}

/// Handle one submission.
///
/// The store is called at most once, and only when the input is valid both
/// before and after sanitizing.
pub async fn process_submission(
    store: &dyn LawStore,
    form: &LawForm,
) -> Result<(), SubmissionError> {
    let law = match validate_submission(&form.law_text, &form.category)
        .and_then(ValidatedLaw::sanitized)
    {
        Ok(law) => law,
        Err(err) => {
            debug!(error = %err, "submission rejected");
            return Err(err.into());
        }
    };

    match store.insert_law(&law).await {
        Ok(()) => {
            info!(category = %law.category(), "law added");
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "failed to add law");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{PersistenceError, ValidationError};
    use crate::law::Category;

    #[derive(Default)]
    struct RecordingStore {
        inserted: Mutex<Vec<ValidatedLaw>>,
        fail_with: Option<PersistenceError>,
    }

    impl RecordingStore {
        fn failing(detail: &str) -> Self {
            Self {
                fail_with: Some(PersistenceError::Statement(detail.to_string())),
                ..Default::default()
            }
        }

        fn inserted(&self) -> Vec<ValidatedLaw> {
            self.inserted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LawStore for RecordingStore {
        async fn insert_law(&self, law: &ValidatedLaw) -> Result<(), PersistenceError> {
            self.inserted.lock().unwrap().push(law.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        async fn ping(&self) -> Result<(), PersistenceError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_valid_submission_inserts_once() {
        let store = RecordingStore::default();
        let form = LawForm::new("Theft is prohibited.", "Iraq");

        process_submission(&store, &form).await.unwrap();

        let inserted = store.inserted();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].law_text(), "Theft is prohibited.");
        assert_eq!(inserted[0].category(), Category::Iraq);
    }

    #[tokio::test]
    async fn test_invalid_submission_skips_store() {
        let store = RecordingStore::default();

        let err = process_submission(&store, &LawForm::new("", "Iraq"))
            .await
            .unwrap_err();
        assert_eq!(err, SubmissionError::Validation(ValidationError::LawText));

        let err = process_submission(&store, &LawForm::new("Theft is prohibited.", "Mars"))
            .await
            .unwrap_err();
        assert_eq!(err, SubmissionError::Validation(ValidationError::Category));

        assert!(store.inserted().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let store = RecordingStore::failing("database is locked");
        let form = LawForm::new("Theft is prohibited.", "Kurdistan");

        let err = process_submission(&store, &form).await.unwrap_err();
        assert_eq!(err.to_string(), "Error adding law: database is locked");
        assert_eq!(store.inserted().len(), 1);
    }

    #[tokio::test]
    async fn test_text_is_sanitized_before_insert() {
        let store = RecordingStore::default();
        let form = LawForm::new("  <em>Theft</em> is \"prohibited\". ", "Iraq");

        process_submission(&store, &form).await.unwrap();

        assert_eq!(
            store.inserted()[0].law_text(),
            "Theft is &#34;prohibited&#34;."
        );
    }

    #[tokio::test]
    async fn test_resubmission_is_not_deduplicated() {
        let store = RecordingStore::default();
        let form = LawForm::new("Theft is prohibited.", "Iraq");

        process_submission(&store, &form).await.unwrap();
        process_submission(&store, &form).await.unwrap();

        assert_eq!(store.inserted().len(), 2);
    }

    #[tokio::test]
    async fn test_text_invalid_after_sanitizing_skips_store() {
        let store = RecordingStore::default();

        for text in ["<b></b>".to_string(), "\"".repeat(500)] {
            let err = process_submission(&store, &LawForm::new(text, "Iraq"))
                .await
                .unwrap_err();
            assert_eq!(err, SubmissionError::Validation(ValidationError::LawText));
        }

        assert!(store.inserted().is_empty());
    }
}
