//! Category mapper.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::mapper::{FieldKind::*, FieldRule, RecordMapper};
use crate::domain::entities::{Category, CategoryFields, CategoryRecord, Relation};

pub const CATEGORY_FIELDS: &[FieldRule] = &[
    FieldRule::read_only("id", BigInteger),
    FieldRule::required("name", Text),
    FieldRule::required("display_name", Text),
    FieldRule::nullable("publication", Reference(Relation::Publication)),
    FieldRule::read_only("publication_name", Text),
    FieldRule::nullable("status", Text),
    FieldRule::read_only("created_at", DateTime),
    FieldRule::read_only("updated_at", DateTime),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRepresentation {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub publication: Option<i64>,
    pub publication_name: Option<String>,
    pub status: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

impl From<CategoryRecord> for CategoryRepresentation {
    fn from(record: CategoryRecord) -> Self {
        let CategoryRecord { category: c, related } = record;
        Self {
            id: c.id,
            name: c.name,
            display_name: c.display_name,
            publication: c.publication_id,
            publication_name: related.publication_name,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CategorySubmission {
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub display_name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub publication: Option<Option<i64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub status: Option<Option<String>>,
}

impl From<CategorySubmission> for CategoryFields {
    fn from(s: CategorySubmission) -> Self {
        Self {
            name: s.name,
            display_name: s.display_name,
            publication_id: s.publication,
            status: s.status,
        }
    }
}

impl RecordMapper for Category {
    type Representation = CategoryRepresentation;
    type Submission = CategorySubmission;
    const FIELDS: &'static [FieldRule] = CATEGORY_FIELDS;
}
