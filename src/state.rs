//! Shared handles for running record services against Postgres.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::api::mapper::{ReadOnlyPolicy, RecordMapper};
use crate::application::services::RecordService;
use crate::domain::repositories::ReferenceChecker;
use crate::infrastructure::persistence::{PgEntity, PgReferenceChecker, PgRepository};

/// Connection pool plus the settings every record service shares.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub references: Arc<dyn ReferenceChecker>,
    pub policy: ReadOnlyPolicy,
}

impl AppState {
    pub fn new(db: Arc<PgPool>, policy: ReadOnlyPolicy) -> Self {
        let references = Arc::new(PgReferenceChecker::new(db.clone()));
        Self {
            db,
            references,
            policy,
        }
    }

    /// Builds the record service for entity `M`.
    pub fn records<M>(&self) -> RecordService<M, PgRepository<M>>
    where
        M: RecordMapper + PgEntity,
        M::Record: for<'r> FromRow<'r, PgRow> + Unpin,
    {
        RecordService::new(
            Arc::new(PgRepository::new(self.db.clone())),
            self.references.clone(),
            self.policy,
        )
    }
}
