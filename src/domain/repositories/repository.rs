//! Repository trait for stored records.

use crate::domain::entities::Entity;
use crate::error::AppError;
use async_trait::async_trait;

/// Data access for one entity type.
///
/// Reads always return the record joined with its one-hop relations as they
/// are at read time; derived values are never stored alongside the record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRepository`] - PostgreSQL implementation
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Fetches a record with its related values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<E::Record>, AppError>;

    /// Lists all records ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<E::Record>, AppError>;

    /// Persists a new record and returns it as re-fetched.
    ///
    /// Fields that were not submitted take the column default.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on unique constraint violations.
    /// Returns [`AppError::Validation`] if a reference vanished after it was checked.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, fields: E::Fields) -> Result<E::Record, AppError>;

    /// Applies the submitted fields to an existing record.
    ///
    /// Returns `None` if no record has this id.
    ///
    /// # Errors
    ///
    /// Same as [`Repository::insert`].
    async fn update(&self, id: i64, fields: E::Fields) -> Result<Option<E::Record>, AppError>;

    /// Deletes a record. Returns `false` if no record has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
