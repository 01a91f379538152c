//! Comment entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::Entity;

/// A reader comment left by a user on an article.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Comment {
    pub id: i64,
    pub comment: String,
    pub user_id: i64,
    pub article_id: i64,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Values read from the commenting user and the commented article.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct CommentRelated {
    pub user_first_name: Option<String>,
    pub user_last_name: Option<String>,
    pub article_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CommentRecord {
    #[sqlx(flatten)]
    pub comment: Comment,
    #[sqlx(flatten)]
    pub related: CommentRelated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentFields {
    pub comment: Option<String>,
    pub user_id: Option<i64>,
    pub article_id: Option<i64>,
    pub rating: Option<Option<i32>>,
}

impl Entity for Comment {
    const NAME: &'static str = "comment";
    const TABLE: &'static str = "comments";

    type Record = CommentRecord;
    type Fields = CommentFields;

    fn record_id(record: &CommentRecord) -> i64 {
        record.comment.id
    }
}
