//! E-book mapper. No derived fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::mapper::{FieldKind::*, FieldRule, RecordMapper};
use crate::domain::entities::{Ebook, EbookFields};

pub const EBOOK_FIELDS: &[FieldRule] = &[
    FieldRule::read_only("id", BigInteger),
    FieldRule::required("title", Text),
    FieldRule::nullable("publish_date", Date),
    FieldRule::nullable("language", Text),
    FieldRule::nullable("direction", Text),
    FieldRule::nullable("status", Text),
    FieldRule::nullable("cover_image", Text),
    FieldRule::optional("is_archived", Boolean),
    FieldRule::nullable("doc_url", Text),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EbookRepresentation {
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

impl From<Ebook> for EbookRepresentation {
    fn from(e: Ebook) -> Self {
        Self {
            id: e.id,
            title: e.title,
            publish_date: e.publish_date,
            language: e.language,
            direction: e.direction,
            status: e.status,
            cover_image: e.cover_image,
            is_archived: e.is_archived,
            doc_url: e.doc_url,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct EbookSubmission {
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

    pub is_archived: Option<bool>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub doc_url: Option<Option<String>>,
}

impl From<EbookSubmission> for EbookFields {
    fn from(s: EbookSubmission) -> Self {
        Self {
            title: s.title,
            publish_date: s.publish_date,
            language: s.language,
            direction: s.direction,
            status: s.status,
            cover_image: s.cover_image,
            is_archived: s.is_archived,
            doc_url: s.doc_url,
        }
    }
}

impl RecordMapper for Ebook {
    type Representation = EbookRepresentation;
    type Submission = EbookSubmission;
    const FIELDS: &'static [FieldRule] = EBOOK_FIELDS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mapper::{MSG_NULL, ReadOnlyPolicy, WriteMode, validate};
    use serde_json::json;

    #[test]
    fn test_archive_flag_cannot_be_null() {
        let err = validate::<Ebook>(
            &json!({ "title": "Collected essays", "is_archived": null }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("is_archived"), Some(&[MSG_NULL.to_string()][..]));
    }

    #[test]
    fn test_partial_archive() {
        let fields = validate::<Ebook>(
            &json!({ "is_archived": true }),
            WriteMode::Partial,
            ReadOnlyPolicy::Reject,
        )
        .unwrap();

        assert_eq!(fields.is_archived, Some(true));
        assert!(fields.title.is_none());
    }
}
