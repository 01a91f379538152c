//! Generic PostgreSQL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use std::marker::PhantomData;
use std::sync::Arc;

use super::PgEntity;
use crate::domain::repositories::Repository;
use crate::error::AppError;

/// PostgreSQL repository for any entity with a [`PgEntity`] impl.
///
/// Reads go through the entity's joined `SELECT`, so derived values reflect
/// the related rows as they are at read time.
pub struct PgRepository<E> {
    pool: Arc<PgPool>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgRepository<E> {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> Repository<E> for PgRepository<E>
where
    E: PgEntity,
    E::Record: for<'r> FromRow<'r, PgRow> + Unpin,
{
    async fn find_by_id(&self, id: i64) -> Result<Option<E::Record>, AppError> {
        let sql = format!("{} WHERE t.id = $1", E::SELECT);
        let record = sqlx::query_as::<_, E::Record>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<E::Record>, AppError> {
        let sql = format!("{} ORDER BY t.id", E::SELECT);
        let records = sqlx::query_as::<_, E::Record>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(records)
    }

    async fn insert(&self, fields: E::Fields) -> Result<E::Record, AppError> {
        let id = E::insert(self.pool.as_ref(), fields).await?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::internal(
                "Inserted record could not be read back",
                json!({ "entity": E::NAME, "id": id }),
            )
        })
    }

    async fn update(&self, id: i64, fields: E::Fields) -> Result<Option<E::Record>, AppError> {
        if !E::update(self.pool.as_ref(), id, fields).await? {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
