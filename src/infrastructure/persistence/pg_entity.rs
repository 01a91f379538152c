//! Per-entity SQL for the generic Postgres repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::Entity;

/// SQL bindings of one entity.
///
/// `SELECT` is the joined read: the entity's table aliased `t`, one
/// `LEFT JOIN` per followed relation, derived values aliased to the
/// `*Related` field names. The repository appends `WHERE`/`ORDER BY`.
///
/// Writes return the affected id; the repository re-reads through `SELECT`
/// so derived values are always current.
#[async_trait]
pub trait PgEntity: Entity {
    const SELECT: &'static str;

    /// Inserts a row. Unsubmitted columns take their default.
    async fn insert(pool: &PgPool, fields: Self::Fields) -> Result<i64, sqlx::Error>;

    /// Updates a row, leaving unsubmitted columns as stored.
    ///
    /// Returns `false` if no row has this id.
    async fn update(pool: &PgPool, id: i64, fields: Self::Fields) -> Result<bool, sqlx::Error>;
}

/// Splits a nullable field into the `CASE WHEN $set THEN $value` pair.
pub(super) fn patch<T>(value: Option<Option<T>>) -> (bool, Option<T>) {
    (value.is_some(), value.flatten())
}
