//! Publication mapper. No derived fields.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::mapper::{FieldKind::*, FieldRule, RecordMapper};
use crate::domain::entities::{Publication, PublicationFields};

pub const PUBLICATION_FIELDS: &[FieldRule] = &[
    FieldRule::read_only("id", BigInteger),
    FieldRule::required("name", Text),
    FieldRule::required("display_name", Text),
    FieldRule::nullable("cover_image", Text),
    FieldRule::nullable("description", Text),
    FieldRule::nullable("status", Text),
    FieldRule::read_only("created_at", DateTime),
    FieldRule::read_only("updated_at", DateTime),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicationRepresentation {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

impl From<Publication> for PublicationRepresentation {
    fn from(p: Publication) -> Self {
        Self {
            id: p.id,
            name: p.name,
            display_name: p.display_name,
            cover_image: p.cover_image,
            description: p.description,
            status: p.status,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct PublicationSubmission {
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub display_name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cover_image: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub status: Option<Option<String>>,
}

impl From<PublicationSubmission> for PublicationFields {
    fn from(s: PublicationSubmission) -> Self {
        Self {
            name: s.name,
            display_name: s.display_name,
            cover_image: s.cover_image,
            description: s.description,
            status: s.status,
        }
    }
}

impl RecordMapper for Publication {
    type Representation = PublicationRepresentation;
    type Submission = PublicationSubmission;
    const FIELDS: &'static [FieldRule] = PUBLICATION_FIELDS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mapper::{MSG_READ_ONLY, MSG_REQUIRED, ReadOnlyPolicy, WriteMode, validate};
    use serde_json::json;

    #[test]
    fn test_name_and_display_name_required() {
        let err = validate::<Publication>(
            &json!({ "status": "Active" }),
            WriteMode::Replace,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("name"), Some(&[MSG_REQUIRED.to_string()][..]));
        assert_eq!(err.get("display_name"), Some(&[MSG_REQUIRED.to_string()][..]));
    }

    #[test]
    fn test_timestamps_are_read_only() {
        let err = validate::<Publication>(
            &json!({
                "name": "hilal-english",
                "display_name": "Hilal English",
                "updated_at": "2025-04-01T00:00:00Z",
            }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("updated_at"), Some(&[MSG_READ_ONLY.to_string()][..]));
    }
}
