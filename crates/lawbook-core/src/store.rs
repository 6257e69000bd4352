//! Persistence seam for laws.

use async_trait::async_trait;

use crate::error::PersistenceError;
use crate::law::ValidatedLaw;

/// A relational store that laws are written to.
///
/// Implementations acquire their connection per call and release it before
/// returning, whether or not the call succeeded.
#[async_trait]
pub trait LawStore: Send + Sync {
    /// Insert one law, stamped with the store's current time.
    ///
    /// Not idempotent: inserting the same law twice creates two rows.
    async fn insert_law(&self, law: &ValidatedLaw) -> Result<(), PersistenceError>;

    /// Check that a connection to the store can be obtained.
    async fn ping(&self) -> Result<(), PersistenceError>;
}
