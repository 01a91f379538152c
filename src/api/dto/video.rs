//! Video mapper.
//!
//! `video_id` and `thumbnail_url` are read-only: they are computed from
//! `youtube_url` whenever a submission sets it.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::mapper::{FieldKind::*, FieldRule, RecordMapper};
use crate::domain::entities::{Video, VideoFields};
use crate::utils::youtube;

pub const VIDEO_FIELDS: &[FieldRule] = &[
    FieldRule::read_only("id", BigInteger),
    FieldRule::required("title", Text),
    FieldRule::required("youtube_url", Text),
    FieldRule::read_only("video_id", Text),
    FieldRule::read_only("thumbnail_url", Text),
    FieldRule::nullable("description", Text),
    FieldRule::nullable("status", Text),
    FieldRule::nullable("language", Text),
    FieldRule::read_only("created_at", DateTime),
    FieldRule::read_only("updated_at", DateTime),
    FieldRule::optional("order", Integer),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRepresentation {
    pub id: i64,
    pub title: String,
    pub youtube_url: String,
    pub video_id: String,
    pub thumbnail_url: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub language: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
    pub order: i32,
}

impl From<Video> for VideoRepresentation {
    fn from(v: Video) -> Self {
        Self {
            id: v.id,
            title: v.title,
            youtube_url: v.youtube_url,
            video_id: v.video_id,
            thumbnail_url: v.thumbnail_url,
            description: v.description,
            status: v.status,
            language: v.language,
            created_at: v.created_at,
            updated_at: v.updated_at,
            order: v.order,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct VideoSubmission {
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub title: Option<String>,

    #[validate(custom(function = "youtube::validate_youtube_url"))]
    pub youtube_url: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub status: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub language: Option<Option<String>>,

    pub order: Option<i32>,
}

impl From<VideoSubmission> for VideoFields {
    fn from(s: VideoSubmission) -> Self {
        let video_id = s
            .youtube_url
            .as_deref()
            .and_then(|url| youtube::extract_video_id(url).ok());
        let thumbnail_url = video_id.as_deref().map(youtube::thumbnail_url);

        Self {
            title: s.title,
            youtube_url: s.youtube_url,
            video_id,
            thumbnail_url,
            description: s.description,
            status: s.status,
            language: s.language,
            order: s.order,
        }
    }
}

impl RecordMapper for Video {
    type Representation = VideoRepresentation;
    type Submission = VideoSubmission;
    const FIELDS: &'static [FieldRule] = VIDEO_FIELDS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mapper::{MSG_READ_ONLY, ReadOnlyPolicy, WriteMode, validate};
    use serde_json::json;

    #[test]
    fn test_video_id_and_thumbnail_are_derived() {
        let fields = validate::<Video>(
            &json!({
                "title": "Launch event",
                "youtube_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap();

        assert_eq!(fields.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(
            fields.thumbnail_url.as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }

    #[test]
    fn test_video_id_is_not_writable() {
        let err = validate::<Video>(
            &json!({
                "title": "Launch event",
                "youtube_url": "https://youtu.be/dQw4w9WgXcQ",
                "video_id": "somethingelse",
            }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("video_id"), Some(&[MSG_READ_ONLY.to_string()][..]));
    }

    #[test]
    fn test_ignored_video_id_does_not_leak_into_fields() {
        let fields = validate::<Video>(
            &json!({
                "title": "Launch event",
                "youtube_url": "https://youtu.be/dQw4w9WgXcQ",
                "video_id": "somethingelse",
            }),
            WriteMode::Create,
            ReadOnlyPolicy::Ignore,
        )
        .unwrap();

        assert_eq!(fields.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_non_youtube_url_is_rejected() {
        let err = validate::<Video>(
            &json!({ "title": "Launch event", "youtube_url": "https://vimeo.com/123" }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert!(err.contains("youtube_url"));
    }

    #[test]
    fn test_partial_without_url_leaves_derived_fields_untouched() {
        let fields = validate::<Video>(
            &json!({ "order": 4 }),
            WriteMode::Partial,
            ReadOnlyPolicy::Reject,
        )
        .unwrap();

        assert_eq!(fields.order, Some(4));
        assert!(fields.youtube_url.is_none());
        assert!(fields.video_id.is_none());
        assert!(fields.thumbnail_url.is_none());
    }
}
