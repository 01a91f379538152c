use async_trait::async_trait;
use sqlx::PgPool;

use super::super::pg_entity::{PgEntity, patch};
use crate::domain::entities::{Publication, PublicationFields};

#[async_trait]
impl PgEntity for Publication {
    const SELECT: &'static str = "SELECT t.* FROM publications t";

    async fn insert(pool: &PgPool, f: PublicationFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO publications (name, display_name, cover_image, description, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(f.name)
        .bind(f.display_name)
        .bind(f.cover_image.flatten())
        .bind(f.description.flatten())
        .bind(f.status.flatten())
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: i64, f: PublicationFields) -> Result<bool, sqlx::Error> {
        let (set_cover, cover_image) = patch(f.cover_image);
        let (set_description, description) = patch(f.description);
        let (set_status, status) = patch(f.status);

        let row: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE publications SET
                name         = COALESCE($2::TEXT, name),
                display_name = COALESCE($3::TEXT, display_name),
                cover_image  = CASE WHEN $4 THEN $5::TEXT ELSE cover_image END,
                description  = CASE WHEN $6 THEN $7::TEXT ELSE description END,
                status       = CASE WHEN $8 THEN $9::TEXT ELSE status END,
                updated_at   = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(f.name)
        .bind(f.display_name)
        .bind(set_cover)
        .bind(cover_image)
        .bind(set_description)
        .bind(description)
        .bind(set_status)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }
}
