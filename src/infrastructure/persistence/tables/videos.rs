use async_trait::async_trait;
use sqlx::PgPool;

use super::super::pg_entity::{PgEntity, patch};
use crate::domain::entities::{Video, VideoFields};

#[async_trait]
impl PgEntity for Video {
    const SELECT: &'static str = "SELECT t.* FROM videos t";

    async fn insert(pool: &PgPool, f: VideoFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO videos (
                title, youtube_url, video_id, thumbnail_url, description, status, language, "order"
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 0))
            RETURNING id
            "#,
        )
        .bind(f.title)
        .bind(f.youtube_url)
        .bind(f.video_id)
        .bind(f.thumbnail_url)
        .bind(f.description.flatten())
        .bind(f.status.flatten())
        .bind(f.language.flatten())
        .bind(f.order)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: i64, f: VideoFields) -> Result<bool, sqlx::Error> {
        let (set_description, description) = patch(f.description);
        let (set_status, status) = patch(f.status);
        let (set_language, language) = patch(f.language);

        let row: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE videos SET
                title         = COALESCE($2::TEXT, title),
                youtube_url   = COALESCE($3::TEXT, youtube_url),
                video_id      = COALESCE($4::TEXT, video_id),
                thumbnail_url = COALESCE($5::TEXT, thumbnail_url),
                description   = CASE WHEN $6 THEN $7::TEXT ELSE description END,
                status        = CASE WHEN $8 THEN $9::TEXT ELSE status END,
                language      = CASE WHEN $10 THEN $11::TEXT ELSE language END,
                "order"       = COALESCE($12::INTEGER, "order"),
                updated_at    = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(f.title)
        .bind(f.youtube_url)
        .bind(f.video_id)
        .bind(f.thumbnail_url)
        .bind(set_description)
        .bind(description)
        .bind(set_status)
        .bind(status)
        .bind(set_language)
        .bind(language)
        .bind(f.order)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }
}
