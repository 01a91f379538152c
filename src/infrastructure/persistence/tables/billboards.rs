use async_trait::async_trait;
use sqlx::PgPool;

use super::super::pg_entity::{PgEntity, patch};
use crate::domain::entities::{Billboard, BillboardFields};

#[async_trait]
impl PgEntity for Billboard {
    const SELECT: &'static str = "SELECT t.* FROM billboards t";

    async fn insert(pool: &PgPool, f: BillboardFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO billboards (user_id, image, title, created, location, issue_news, status)
            VALUES ($1, $2, $3, COALESCE($4, NOW()), $5, COALESCE($6, FALSE), $7)
            RETURNING id
            "#,
        )
        .bind(f.user_id.flatten())
        .bind(f.image.flatten())
        .bind(f.title)
        .bind(f.created)
        .bind(f.location.flatten())
        .bind(f.issue_news)
        .bind(f.status.flatten())
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: i64, f: BillboardFields) -> Result<bool, sqlx::Error> {
        let (set_user, user) = patch(f.user_id);
        let (set_image, image) = patch(f.image);
        let (set_location, location) = patch(f.location);
        let (set_status, status) = patch(f.status);

        let row: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE billboards SET
                user_id    = CASE WHEN $2 THEN $3::BIGINT ELSE user_id END,
                image      = CASE WHEN $4 THEN $5::TEXT ELSE image END,
                title      = COALESCE($6::TEXT, title),
                created    = COALESCE($7::TIMESTAMPTZ, created),
                location   = CASE WHEN $8 THEN $9::TEXT ELSE location END,
                issue_news = COALESCE($10::BOOLEAN, issue_news),
                status     = CASE WHEN $11 THEN $12::TEXT ELSE status END
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(set_user)
        .bind(user)
        .bind(set_image)
        .bind(image)
        .bind(f.title)
        .bind(f.created)
        .bind(set_location)
        .bind(location)
        .bind(f.issue_news)
        .bind(set_status)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }
}
