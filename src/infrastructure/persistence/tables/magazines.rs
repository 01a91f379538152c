use async_trait::async_trait;
use sqlx::PgPool;

use super::super::pg_entity::{PgEntity, patch};
use crate::domain::entities::{Magazine, MagazineFields};

#[async_trait]
impl PgEntity for Magazine {
    const SELECT: &'static str = r#"
        SELECT t.*,
               p.name         AS publication_name,
               p.display_name AS publication_display_name
        FROM magazines t
        LEFT JOIN publications p ON p.id = t.publication_id
    "#;

    async fn insert(pool: &PgPool, f: MagazineFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO magazines (
                title, publish_date, language, direction, status, cover_image,
                doc_url, publication_id, year, month
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(f.title)
        .bind(f.publish_date.flatten())
        .bind(f.language.flatten())
        .bind(f.direction.flatten())
        .bind(f.status.flatten())
        .bind(f.cover_image.flatten())
        .bind(f.doc_url.flatten())
        .bind(f.publication_id.flatten())
        .bind(f.year.flatten())
        .bind(f.month.flatten())
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: i64, f: MagazineFields) -> Result<bool, sqlx::Error> {
        let (set_date, publish_date) = patch(f.publish_date);
        let (set_language, language) = patch(f.language);
        let (set_direction, direction) = patch(f.direction);
        let (set_status, status) = patch(f.status);
        let (set_cover, cover_image) = patch(f.cover_image);
        let (set_doc, doc_url) = patch(f.doc_url);
        let (set_publication, publication) = patch(f.publication_id);
        let (set_year, year) = patch(f.year);
        let (set_month, month) = patch(f.month);

        let row: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE magazines SET
                title          = COALESCE($2::TEXT, title),
                publish_date   = CASE WHEN $3 THEN $4::DATE ELSE publish_date END,
                language       = CASE WHEN $5 THEN $6::TEXT ELSE language END,
                direction      = CASE WHEN $7 THEN $8::TEXT ELSE direction END,
                status         = CASE WHEN $9 THEN $10::TEXT ELSE status END,
                cover_image    = CASE WHEN $11 THEN $12::TEXT ELSE cover_image END,
                doc_url        = CASE WHEN $13 THEN $14::TEXT ELSE doc_url END,
                publication_id = CASE WHEN $15 THEN $16::BIGINT ELSE publication_id END,
                year           = CASE WHEN $17 THEN $18::INTEGER ELSE year END,
                month          = CASE WHEN $19 THEN $20::INTEGER ELSE month END
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
        .bind(set_doc)
        .bind(doc_url)
        .bind(set_publication)
        .bind(publication)
        .bind(set_year)
        .bind(year)
        .bind(set_month)
        .bind(month)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }
}
