//! E-book entity.

use chrono::NaiveDate;
use sqlx::FromRow;

use super::Entity;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Ebook {
    pub id: i64,
    pub title: String,
    pub publish_date: Option<NaiveDate>,
    pub language: Option<String>,
    pub direction: Option<String>,
    pub status: Option<String>,
    pub cover_image: Option<String>,
    pub is_archived: bool,
    pub doc_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EbookFields {
    pub title: Option<String>,
    pub publish_date: Option<Option<NaiveDate>>,
    pub language: Option<Option<String>>,
    pub direction: Option<Option<String>>,
    pub status: Option<Option<String>>,
    pub cover_image: Option<Option<String>>,
    pub is_archived: Option<bool>,
    pub doc_url: Option<Option<String>>,
}

impl Entity for Ebook {
    const NAME: &'static str = "ebook";
    const TABLE: &'static str = "ebooks";

    type Record = Ebook;
    type Fields = EbookFields;

    fn record_id(record: &Ebook) -> i64 {
        record.id
    }
}
