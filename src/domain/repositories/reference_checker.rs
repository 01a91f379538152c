//! Existence checks for submitted references.

use crate::domain::entities::Relation;
use crate::error::AppError;
use async_trait::async_trait;

/// Looks up whether a referenced record exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceChecker: Send + Sync {
    /// Returns true if a record of type `relation` with this id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, relation: Relation, id: i64) -> Result<bool, AppError>;
}
