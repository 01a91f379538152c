use async_trait::async_trait;
use sqlx::PgPool;

use super::super::pg_entity::{PgEntity, patch};
use crate::domain::entities::{Author, AuthorFields};

#[async_trait]
impl PgEntity for Author {
    const SELECT: &'static str = "SELECT t.* FROM authors t";

    async fn insert(pool: &PgPool, f: AuthorFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO authors (
                author_image, author_name, email, contact_no, no_of_articles,
                status, category, introduction
            )
            VALUES ($1, $2, $3, $4, COALESCE($5, 0), $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(f.author_image.flatten())
        .bind(f.author_name)
        .bind(f.email.flatten())
        .bind(f.contact_no.flatten())
        .bind(f.no_of_articles)
        .bind(f.status.flatten())
        .bind(f.category.flatten())
        .bind(f.introduction.flatten())
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: i64, f: AuthorFields) -> Result<bool, sqlx::Error> {
        let (set_image, image) = patch(f.author_image);
        let (set_email, email) = patch(f.email);
        let (set_contact, contact_no) = patch(f.contact_no);
        let (set_status, status) = patch(f.status);
        let (set_category, category) = patch(f.category);
        let (set_intro, introduction) = patch(f.introduction);

        let row: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE authors SET
                author_image   = CASE WHEN $2 THEN $3::TEXT ELSE author_image END,
                author_name    = COALESCE($4::TEXT, author_name),
                email          = CASE WHEN $5 THEN $6::TEXT ELSE email END,
                contact_no     = CASE WHEN $7 THEN $8::TEXT ELSE contact_no END,
                no_of_articles = COALESCE($9::INTEGER, no_of_articles),
                status         = CASE WHEN $10 THEN $11::TEXT ELSE status END,
                category       = CASE WHEN $12 THEN $13::TEXT ELSE category END,
                introduction   = CASE WHEN $14 THEN $15::TEXT ELSE introduction END
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(set_image)
        .bind(image)
        .bind(f.author_name)
        .bind(set_email)
        .bind(email)
        .bind(set_contact)
        .bind(contact_no)
        .bind(f.no_of_articles)
        .bind(set_status)
        .bind(status)
        .bind(set_category)
        .bind(category)
        .bind(set_intro)
        .bind(introduction)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }
}
