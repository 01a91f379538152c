use async_trait::async_trait;
use sqlx::PgPool;

use super::super::pg_entity::{PgEntity, patch};
use crate::domain::entities::{Comment, CommentFields};

#[async_trait]
impl PgEntity for Comment {
    // Names come from the user row at read time, never from the comment.
    const SELECT: &'static str = r#"
        SELECT t.*,
               u.fname AS user_first_name,
               u.lname AS user_last_name,
               a.title AS article_title
        FROM comments t
        LEFT JOIN users u    ON u.id = t.user_id
        LEFT JOIN articles a ON a.id = t.article_id
    "#;

    async fn insert(pool: &PgPool, f: CommentFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO comments (comment, user_id, article_id, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(f.comment)
        .bind(f.user_id)
        .bind(f.article_id)
        .bind(f.rating.flatten())
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: i64, f: CommentFields) -> Result<bool, sqlx::Error> {
        let (set_rating, rating) = patch(f.rating);

        let row: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE comments SET
                comment    = COALESCE($2::TEXT, comment),
                user_id    = COALESCE($3::BIGINT, user_id),
                article_id = COALESCE($4::BIGINT, article_id),
                rating     = CASE WHEN $5 THEN $6::INTEGER ELSE rating END
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(f.comment)
        .bind(f.user_id)
        .bind(f.article_id)
        .bind(set_rating)
        .bind(rating)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }
}
