use async_trait::async_trait;
use sqlx::PgPool;

use super::super::pg_entity::{PgEntity, patch};
use crate::domain::entities::{Ebook, EbookFields};

#[async_trait]
impl PgEntity for Ebook {
    const SELECT: &'static str = "SELECT t.* FROM ebooks t";

    async fn insert(pool: &PgPool, f: EbookFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO ebooks (
                title, publish_date, language, direction, status, cover_image, is_archived, doc_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, FALSE), $8)
            RETURNING id
            "#,
        )
        .bind(f.title)
        .bind(f.publish_date.flatten())
        .bind(f.language.flatten())
        .bind(f.direction.flatten())
        .bind(f.status.flatten())
        .bind(f.cover_image.flatten())
        .bind(f.is_archived)
        .bind(f.doc_url.flatten())
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: i64, f: EbookFields) -> Result<bool, sqlx::Error> {
        let (set_date, publish_date) = patch(f.publish_date);
        let (set_language, language) = patch(f.language);
        let (set_direction, direction) = patch(f.direction);
        let (set_status, status) = patch(f.status);
        let (set_cover, cover_image) = patch(f.cover_image);
        let (set_doc, doc_url) = patch(f.doc_url);

        let row: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE ebooks SET
                title        = COALESCE($2::TEXT, title),
                publish_date = CASE WHEN $3 THEN $4::DATE ELSE publish_date END,
                language     = CASE WHEN $5 THEN $6::TEXT ELSE language END,
                direction    = CASE WHEN $7 THEN $8::TEXT ELSE direction END,
                status       = CASE WHEN $9 THEN $10::TEXT ELSE status END,
                cover_image  = CASE WHEN $11 THEN $12::TEXT ELSE cover_image END,
                is_archived  = COALESCE($13::BOOLEAN, is_archived),
                doc_url      = CASE WHEN $14 THEN $15::TEXT ELSE doc_url END
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(f.title)
        .bind(set_date)
        .bind(publish_date)
        .bind(set_language)
        .bind(language)
        .bind(set_direction)
        .bind(direction)
        .bind(set_status)
        .bind(status)
        .bind(set_cover)
        .bind(cover_image)
        .bind(f.is_archived)
        .bind(set_doc)
        .bind(doc_url)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }
}
