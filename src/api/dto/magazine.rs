//! Magazine mapper.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::mapper::{FieldKind::*, FieldRule, RecordMapper};
use crate::domain::entities::{Magazine, MagazineFields, MagazineRecord, Relation};

pub const MAGAZINE_FIELDS: &[FieldRule] = &[
    FieldRule::read_only("id", BigInteger),
    FieldRule::required("title", Text),
    FieldRule::nullable("publish_date", Date),
    FieldRule::nullable("language", Text),
    FieldRule::nullable("direction", Text),
    FieldRule::nullable("status", Text),
    FieldRule::nullable("cover_image", Text),
    FieldRule::nullable("doc_url", Text),
    FieldRule::nullable("publication", Reference(Relation::Publication)),
    FieldRule::read_only("publication_name", Text),
    FieldRule::read_only("publication_display_name", Text),
    FieldRule::nullable("year", Integer),
    FieldRule::nullable("month", Integer),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagazineRepresentation {
    pub id: i64,
    pub title: String,
    pub publish_date: Option<NaiveDate>,
    pub language: Option<String>,
    pub direction: Option<String>,
    pub status: Option<String>,
    pub cover_image: Option<String>,
    pub doc_url: Option<String>,
    pub publication: Option<i64>,
    pub publication_name: Option<String>,
    pub publication_display_name: Option<String>,
    pub year: Option<i32>,
    pub month: Option<i32>,
}

impl From<MagazineRecord> for MagazineRepresentation {
    fn from(record: MagazineRecord) -> Self {
        let MagazineRecord { magazine: m, related } = record;
        Self {
            id: m.id,
            title: m.title,
            publish_date: m.publish_date,
            language: m.language,
            direction: m.direction,
            status: m.status,
            cover_image: m.cover_image,
            doc_url: m.doc_url,
            publication: m.publication_id,
            publication_name: related.publication_name,
            publication_display_name: related.publication_display_name,
            year: m.year,
            month: m.month,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct MagazineSubmission {
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub title: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub publish_date: Option<Option<NaiveDate>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub language: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 10, message = "Ensure this field has no more than 10 characters."))]
    pub direction: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub status: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cover_image: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub doc_url: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub publication: Option<Option<i64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(range(min = 1900, max = 2200, message = "Ensure this value is between 1900 and 2200."))]
    pub year: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(range(min = 1, max = 12, message = "Ensure this value is between 1 and 12."))]
    pub month: Option<Option<i32>>,
}

impl From<MagazineSubmission> for MagazineFields {
    fn from(s: MagazineSubmission) -> Self {
        Self {
            title: s.title,
            publish_date: s.publish_date,
            language: s.language,
            direction: s.direction,
            status: s.status,
            cover_image: s.cover_image,
            doc_url: s.doc_url,
            publication_id: s.publication,
            year: s.year,
            month: s.month,
        }
    }
}

impl RecordMapper for Magazine {
    type Representation = MagazineRepresentation;
    type Submission = MagazineSubmission;
    const FIELDS: &'static [FieldRule] = MAGAZINE_FIELDS;
}
