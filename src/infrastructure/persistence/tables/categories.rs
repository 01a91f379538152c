use async_trait::async_trait;
use sqlx::PgPool;

use super::super::pg_entity::{PgEntity, patch};
use crate::domain::entities::{Category, CategoryFields};

#[async_trait]
impl PgEntity for Category {
    const SELECT: &'static str = r#"
        SELECT t.*,
               p.name AS publication_name
        FROM categories t
        LEFT JOIN publications p ON p.id = t.publication_id
    "#;

    async fn insert(pool: &PgPool, f: CategoryFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO categories (name, display_name, publication_id, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(f.name)
        .bind(f.display_name)
        .bind(f.publication_id.flatten())
        .bind(f.status.flatten())
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: i64, f: CategoryFields) -> Result<bool, sqlx::Error> {
        let (set_publication, publication) = patch(f.publication_id);
        let (set_status, status) = patch(f.status);

        let row: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE categories SET
                name           = COALESCE($2::TEXT, name),
                display_name   = COALESCE($3::TEXT, display_name),
                publication_id = CASE WHEN $4 THEN $5::BIGINT ELSE publication_id END,
                status         = CASE WHEN $6 THEN $7::TEXT ELSE status END,
                updated_at     = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(f.name)
        .bind(f.display_name)
        .bind(set_publication)
        .bind(publication)
        .bind(set_status)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }
}
