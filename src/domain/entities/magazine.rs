//! Magazine issue entity.

use chrono::NaiveDate;
use sqlx::FromRow;

use super::Entity;

/// A magazine issue, optionally belonging to a publication.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Magazine {
    pub id: i64,
    pub title: String,
    pub publish_date: Option<NaiveDate>,
    pub language: Option<String>,
    pub direction: Option<String>,
    pub status: Option<String>,
    pub cover_image: Option<String>,
    pub doc_url: Option<String>,
    pub publication_id: Option<i64>,
    pub year: Option<i32>,
    pub month: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct MagazineRelated {
    pub publication_name: Option<String>,
    pub publication_display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MagazineRecord {
    #[sqlx(flatten)]
    pub magazine: Magazine,
    #[sqlx(flatten)]
    pub related: MagazineRelated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MagazineFields {
    pub title: Option<String>,
    pub publish_date: Option<Option<NaiveDate>>,
    pub language: Option<Option<String>>,
    pub direction: Option<Option<String>>,
    pub status: Option<Option<String>>,
    pub cover_image: Option<Option<String>>,
    pub doc_url: Option<Option<String>>,
    pub publication_id: Option<Option<i64>>,
    pub year: Option<Option<i32>>,
    pub month: Option<Option<i32>>,
}

impl Entity for Magazine {
    const NAME: &'static str = "magazine";
    const TABLE: &'static str = "magazines";

    type Record = MagazineRecord;
    type Fields = MagazineFields;

    fn record_id(record: &MagazineRecord) -> i64 {
        record.magazine.id
    }
}
