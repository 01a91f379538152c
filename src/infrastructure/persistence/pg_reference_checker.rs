//! PostgreSQL implementation of reference existence checks.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Relation;
use crate::domain::repositories::ReferenceChecker;
use crate::error::AppError;

pub struct PgReferenceChecker {
    pool: Arc<PgPool>,
}

impl PgReferenceChecker {
    /// Creates a new checker with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceChecker for PgReferenceChecker {
    async fn exists(&self, relation: Relation, id: i64) -> Result<bool, AppError> {
        // Table names come from a closed enum, never from input.
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", relation.table());
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }
}
