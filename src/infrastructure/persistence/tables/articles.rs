use async_trait::async_trait;
use sqlx::PgPool;

use super::super::pg_entity::{PgEntity, patch};
use crate::domain::entities::{Article, ArticleFields};

#[async_trait]
impl PgEntity for Article {
    const SELECT: &'static str = r#"
        SELECT t.*,
               c.name         AS category_name,
               c.display_name AS category_display_name,
               p.name         AS publication_name,
               p.display_name AS publication_display_name,
               m.title        AS magazine_title,
               a.author_name  AS author_name,
               a.author_image AS author_image
        FROM articles t
        LEFT JOIN categories c   ON c.id = t.category_id
        LEFT JOIN publications p ON p.id = t.publication_id
        LEFT JOIN magazines m    ON m.id = t.magazine_id
        LEFT JOIN authors a      ON a.id = t.author_id
    "#;

    async fn insert(pool: &PgPool, f: ArticleFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO articles (
                author_id, publication_id, magazine_id, category_id, cover_image, title,
                publish_date, publish_date_year, publish_date_month, visits, issue_new,
                status, description, section
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9,
                    COALESCE($10, 0), COALESCE($11, FALSE), $12, $13, $14)
            RETURNING id
            "#,
        )
        .bind(f.author_id.flatten())
        .bind(f.publication_id.flatten())
        .bind(f.magazine_id.flatten())
        .bind(f.category_id.flatten())
        .bind(f.cover_image.flatten())
        .bind(f.title)
        .bind(f.publish_date.flatten())
        .bind(f.publish_date_year.flatten())
        .bind(f.publish_date_month.flatten())
        .bind(f.visits)
        .bind(f.issue_new)
        .bind(f.status.flatten())
        .bind(f.description.flatten())
        .bind(f.section.flatten())
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: i64, f: ArticleFields) -> Result<bool, sqlx::Error> {
        let (set_author, author) = patch(f.author_id);
        let (set_publication, publication) = patch(f.publication_id);
        let (set_magazine, magazine) = patch(f.magazine_id);
        let (set_category, category) = patch(f.category_id);
        let (set_cover, cover_image) = patch(f.cover_image);
        let (set_date, publish_date) = patch(f.publish_date);
        let (set_year, year) = patch(f.publish_date_year);
        let (set_month, month) = patch(f.publish_date_month);
        let (set_status, status) = patch(f.status);
        let (set_description, description) = patch(f.description);
        let (set_section, section) = patch(f.section);

        let row: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE articles SET
                author_id          = CASE WHEN $2 THEN $3::BIGINT ELSE author_id END,
                publication_id     = CASE WHEN $4 THEN $5::BIGINT ELSE publication_id END,
                magazine_id        = CASE WHEN $6 THEN $7::BIGINT ELSE magazine_id END,
                category_id        = CASE WHEN $8 THEN $9::BIGINT ELSE category_id END,
                cover_image        = CASE WHEN $10 THEN $11::TEXT ELSE cover_image END,
                title              = COALESCE($12::TEXT, title),
                publish_date       = CASE WHEN $13 THEN $14::DATE ELSE publish_date END,
                publish_date_year  = CASE WHEN $15 THEN $16::INTEGER ELSE publish_date_year END,
                publish_date_month = CASE WHEN $17 THEN $18::INTEGER ELSE publish_date_month END,
                visits             = COALESCE($19::BIGINT, visits),
                issue_new          = COALESCE($20::BOOLEAN, issue_new),
                status             = CASE WHEN $21 THEN $22::TEXT ELSE status END,
                description        = CASE WHEN $23 THEN $24::TEXT ELSE description END,
                section            = CASE WHEN $25 THEN $26::TEXT ELSE section END
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(set_author)
        .bind(author)
        .bind(set_publication)
        .bind(publication)
        .bind(set_magazine)
        .bind(magazine)
        .bind(set_category)
        .bind(category)
        .bind(set_cover)
        .bind(cover_image)
        .bind(f.title)
        .bind(set_date)
        .bind(publish_date)
        .bind(set_year)
        .bind(year)
        .bind(set_month)
        .bind(month)
        .bind(f.visits)
        .bind(f.issue_new)
        .bind(set_status)
        .bind(status)
        .bind(set_description)
        .bind(description)
        .bind(set_section)
        .bind(section)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }
}
