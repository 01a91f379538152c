//! Comment mapper.
//!
//! Commenter names and the article title are read through the user and
//! article references each time the comment is fetched.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::mapper::{FieldKind::*, FieldRule, RecordMapper};
use crate::domain::entities::{Comment, CommentFields, CommentRecord, Relation};

pub const COMMENT_FIELDS: &[FieldRule] = &[
    FieldRule::read_only("id", BigInteger),
    FieldRule::required("comment", Text),
    FieldRule::required("user", Reference(Relation::User)),
    FieldRule::read_only("user_first_name", Text),
    FieldRule::read_only("user_last_name", Text),
    FieldRule::required("article", Reference(Relation::Article)),
    FieldRule::read_only("article_title", Text),
    FieldRule::read_only("created_at", DateTime),
    FieldRule::nullable("rating", Integer),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentRepresentation {
    pub id: i64,
    pub comment: String,
    pub user: i64,
    pub user_first_name: Option<String>,
    pub user_last_name: Option<String>,
    pub article: i64,
    pub article_title: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
    pub rating: Option<i32>,
}

impl From<CommentRecord> for CommentRepresentation {
    fn from(record: CommentRecord) -> Self {
        let CommentRecord { comment, related } = record;
        Self {
            id: comment.id,
            comment: comment.comment,
            user: comment.user_id,
            user_first_name: related.user_first_name,
            user_last_name: related.user_last_name,
            article: comment.article_id,
            article_title: related.article_title,
            created_at: comment.created_at,
            rating: comment.rating,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CommentSubmission {
    #[validate(length(max = 5000, message = "Ensure this field has no more than 5000 characters."))]
    pub comment: Option<String>,

    pub user: Option<i64>,

    pub article: Option<i64>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(range(min = 0, max = 5, message = "Ensure this value is between 0 and 5."))]
    pub rating: Option<Option<i32>>,
}

impl From<CommentSubmission> for CommentFields {
    fn from(s: CommentSubmission) -> Self {
        Self {
            comment: s.comment,
            user_id: s.user,
            article_id: s.article,
            rating: s.rating,
        }
    }
}

impl RecordMapper for Comment {
    type Representation = CommentRepresentation;
    type Submission = CommentSubmission;
    const FIELDS: &'static [FieldRule] = COMMENT_FIELDS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mapper::{MSG_READ_ONLY, ReadOnlyPolicy, WriteMode, validate};
    use crate::domain::entities::CommentRelated;
    use serde_json::json;

    fn record(first: &str, last: &str) -> CommentRecord {
        CommentRecord {
            comment: Comment {
                id: 11,
                comment: "Great piece".to_string(),
                user_id: 4,
                article_id: 9,
                rating: Some(5),
                created_at: Utc::now(),
            },
            related: CommentRelated {
                user_first_name: Some(first.to_string()),
                user_last_name: Some(last.to_string()),
                article_title: Some("Spring issue".to_string()),
            },
        }
    }

    #[test]
    fn test_user_names_come_from_the_joined_user() {
        let repr = CommentRepresentation::from(record("Amina", "Khan"));

        assert_eq!(repr.user, 4);
        assert_eq!(repr.user_first_name.as_deref(), Some("Amina"));
        assert_eq!(repr.user_last_name.as_deref(), Some("Khan"));
        assert_eq!(repr.article_title.as_deref(), Some("Spring issue"));
    }

    #[test]
    fn test_requires_comment_user_and_article() {
        let err = validate::<Comment>(&json!({ "rating": 3 }), WriteMode::Create, ReadOnlyPolicy::Reject)
            .unwrap_err();

        assert!(err.contains("comment"));
        assert!(err.contains("user"));
        assert!(err.contains("article"));
        assert!(!err.contains("rating"));
    }

    #[test]
    fn test_user_names_are_not_writable() {
        let err = validate::<Comment>(
            &json!({
                "comment": "hi",
                "user": 1,
                "article": 1,
                "user_first_name": "Mallory",
                "created_at": "2025-01-01T00:00:00Z",
            }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("user_first_name"), Some(&[MSG_READ_ONLY.to_string()][..]));
        assert_eq!(err.get("created_at"), Some(&[MSG_READ_ONLY.to_string()][..]));
    }

    #[test]
    fn test_rating_out_of_range() {
        let err = validate::<Comment>(
            &json!({ "comment": "hi", "user": 1, "article": 1, "rating": 6 }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(
            err.get("rating"),
            Some(&["Ensure this value is between 0 and 5.".to_string()][..])
        );
    }

    #[test]
    fn test_valid_comment() {
        let fields = validate::<Comment>(
            &json!({ "comment": "hi", "user": 1, "article": 2, "rating": null }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap();

        assert_eq!(fields.user_id, Some(1));
        assert_eq!(fields.article_id, Some(2));
        assert_eq!(fields.rating, Some(None));
    }
}
