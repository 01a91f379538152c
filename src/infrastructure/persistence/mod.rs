//! PostgreSQL persistence.
//!
//! One generic repository serves every entity; the per-entity SQL lives in
//! [`PgEntity`] impls under `tables`. Queries are built at runtime and bound
//! with `sqlx`, so no database is needed to compile.
//!
//! # Components
//!
//! - [`PgRepository`] - joined reads and writes for one entity type
//! - [`PgReferenceChecker`] - existence checks for submitted references
//! - [`connect`] - pool setup and embedded migrations

pub mod pg_entity;
pub mod pg_reference_checker;
pub mod pg_repository;
mod tables;

pub use pg_entity::PgEntity;
pub use pg_reference_checker::PgReferenceChecker;
pub use pg_repository::PgRepository;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Opens the connection pool and, if enabled, applies the embedded migrations.
///
/// # Errors
///
/// Returns an error if no database is configured, the database is
/// unreachable, or a migration fails.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let url = config.database_url()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to apply migrations")?;
        tracing::info!("Migrations applied");
    }

    Ok(pool)
}
