//! Contributor mapper.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::mapper::{FieldKind::*, FieldRule, RecordMapper};
use crate::domain::entities::{Contributor, ContributorFields, ContributorRecord, Relation};

pub const CONTRIBUTOR_FIELDS: &[FieldRule] = &[
    FieldRule::read_only("id", BigInteger),
    FieldRule::nullable("publication", Reference(Relation::Publication)),
    FieldRule::read_only("publication_name", Text),
    FieldRule::read_only("publication_display_name", Text),
    FieldRule::required("name", Text),
    FieldRule::nullable("designation", Text),
    FieldRule::nullable("about", Text),
    FieldRule::nullable("cover_image", Text),
    FieldRule::optional("order", Integer),
    FieldRule::nullable("status", Text),
    FieldRule::read_only("created_at", DateTime),
    FieldRule::read_only("updated_at", DateTime),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributorRepresentation {
    pub id: i64,
    pub publication: Option<i64>,
    pub publication_name: Option<String>,
    pub publication_display_name: Option<String>,
    pub name: String,
    pub designation: Option<String>,
    pub about: Option<String>,
    pub cover_image: Option<String>,
    pub order: i32,
    pub status: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

impl From<ContributorRecord> for ContributorRepresentation {
    fn from(record: ContributorRecord) -> Self {
        let ContributorRecord {
            contributor: c,
            related,
        } = record;
        Self {
            id: c.id,
            publication: c.publication_id,
            publication_name: related.publication_name,
            publication_display_name: related.publication_display_name,
            name: c.name,
            designation: c.designation,
            about: c.about,
            cover_image: c.cover_image,
            order: c.order,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ContributorSubmission {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub publication: Option<Option<i64>>,

    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub designation: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub about: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cover_image: Option<Option<String>>,

    pub order: Option<i32>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub status: Option<Option<String>>,
}

impl From<ContributorSubmission> for ContributorFields {
    fn from(s: ContributorSubmission) -> Self {
        Self {
            publication_id: s.publication,
            name: s.name,
            designation: s.designation,
            about: s.about,
            cover_image: s.cover_image,
            order: s.order,
            status: s.status,
        }
    }
}

impl RecordMapper for Contributor {
    type Representation = ContributorRepresentation;
    type Submission = ContributorSubmission;
    const FIELDS: &'static [FieldRule] = CONTRIBUTOR_FIELDS;
}
