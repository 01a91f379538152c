//! Author entity.

use sqlx::FromRow;

use super::Entity;

/// An article author profile.
///
/// `category` is a free-text beat label, not a reference to [`super::Category`].
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Author {
    pub id: i64,
    pub author_image: Option<String>,
    pub author_name: String,
    pub email: Option<String>,
    pub contact_no: Option<String>,
    pub no_of_articles: i32,
    pub status: Option<String>,
    pub category: Option<String>,
    pub introduction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorFields {
    pub author_image: Option<Option<String>>,
    pub author_name: Option<String>,
    pub email: Option<Option<String>>,
    pub contact_no: Option<Option<String>>,
    pub no_of_articles: Option<i32>,
    pub status: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub introduction: Option<Option<String>>,
}

impl Entity for Author {
    const NAME: &'static str = "author";
    const TABLE: &'static str = "authors";

    type Record = Author;
    type Fields = AuthorFields;

    fn record_id(record: &Author) -> i64 {
        record.id
    }
}
