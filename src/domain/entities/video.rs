//! Video entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::Entity;

/// An embedded YouTube video.
///
/// `video_id` and `thumbnail_url` are always derived from `youtube_url` when
/// it is written; they are never accepted from a submission.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub youtube_url: String,
    pub video_id: String,
    pub thumbnail_url: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub language: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated field set for a video write.
///
/// `video_id` and `thumbnail_url` are set together with `youtube_url` and
/// are `None` whenever it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoFields {
    pub title: Option<String>,
    pub youtube_url: Option<String>,
    pub video_id: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<Option<String>>,
    pub language: Option<Option<String>>,
    pub order: Option<i32>,
}

impl Entity for Video {
    const NAME: &'static str = "video";
    const TABLE: &'static str = "videos";

    type Record = Video;
    type Fields = VideoFields;

    fn record_id(record: &Video) -> i64 {
        record.id
    }
}
