use async_trait::async_trait;
use sqlx::PgPool;

use super::super::pg_entity::{PgEntity, patch};
use crate::domain::entities::{Contributor, ContributorFields};

#[async_trait]
impl PgEntity for Contributor {
    const SELECT: &'static str = r#"
        SELECT t.*,
               p.name         AS publication_name,
               p.display_name AS publication_display_name
        FROM contributors t
        LEFT JOIN publications p ON p.id = t.publication_id
    "#;

    async fn insert(pool: &PgPool, f: ContributorFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO contributors (
                publication_id, name, designation, about, cover_image, "order", status
            )
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7)
            RETURNING id
            "#,
        )
        .bind(f.publication_id.flatten())
        .bind(f.name)
        .bind(f.designation.flatten())
        .bind(f.about.flatten())
        .bind(f.cover_image.flatten())
        .bind(f.order)
        .bind(f.status.flatten())
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: i64, f: ContributorFields) -> Result<bool, sqlx::Error> {
        let (set_publication, publication) = patch(f.publication_id);
        let (set_designation, designation) = patch(f.designation);
        let (set_about, about) = patch(f.about);
        let (set_cover, cover_image) = patch(f.cover_image);
        let (set_status, status) = patch(f.status);

        let row: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE contributors SET
                publication_id = CASE WHEN $2 THEN $3::BIGINT ELSE publication_id END,
                name           = COALESCE($4::TEXT, name),
                designation    = CASE WHEN $5 THEN $6::TEXT ELSE designation END,
                about          = CASE WHEN $7 THEN $8::TEXT ELSE about END,
                cover_image    = CASE WHEN $9 THEN $10::TEXT ELSE cover_image END,
                "order"        = COALESCE($11::INTEGER, "order"),
                status         = CASE WHEN $12 THEN $13::TEXT ELSE status END,
                updated_at     = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(set_publication)
        .bind(publication)
        .bind(f.name)
        .bind(set_designation)
        .bind(designation)
        .bind(set_about)
        .bind(about)
        .bind(set_cover)
        .bind(cover_image)
        .bind(f.order)
        .bind(set_status)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }
}
