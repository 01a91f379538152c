//! Billboard mapper. No derived fields.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::mapper::{FieldKind::*, FieldRule, RecordMapper};
use crate::domain::entities::{Billboard, BillboardFields, Relation};

pub const BILLBOARD_FIELDS: &[FieldRule] = &[
    FieldRule::read_only("id", BigInteger),
    FieldRule::nullable("user", Reference(Relation::User)),
    FieldRule::nullable("image", Text),
    FieldRule::required("title", Text),
    FieldRule::optional("created", DateTime),
    FieldRule::nullable("location", Text),
    FieldRule::optional("issue_news", Boolean),
    FieldRule::nullable("status", Text),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillboardRepresentation {
    pub id: i64,
    pub user: Option<i64>,
    pub image: Option<String>,
    pub title: String,
    pub created: chrono::DateTime<Utc>,
    pub location: Option<String>,
    pub issue_news: bool,
    pub status: Option<String>,
}

impl From<Billboard> for BillboardRepresentation {
    fn from(b: Billboard) -> Self {
        Self {
            id: b.id,
            user: b.user_id,
            image: b.image,
            title: b.title,
            created: b.created,
            location: b.location,
            issue_news: b.issue_news,
            status: b.status,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct BillboardSubmission {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub user: Option<Option<i64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub image: Option<Option<String>>,

    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub title: Option<String>,

    pub created: Option<chrono::DateTime<Utc>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub location: Option<Option<String>>,

    pub issue_news: Option<bool>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub status: Option<Option<String>>,
}

impl From<BillboardSubmission> for BillboardFields {
    fn from(s: BillboardSubmission) -> Self {
        Self {
            user_id: s.user,
            image: s.image,
            title: s.title,
            created: s.created,
            location: s.location,
            issue_news: s.issue_news,
            status: s.status,
        }
    }
}

impl RecordMapper for Billboard {
    type Representation = BillboardRepresentation;
    type Submission = BillboardSubmission;
    const FIELDS: &'static [FieldRule] = BILLBOARD_FIELDS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mapper::{ReadOnlyPolicy, WriteMode, validate};
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_created_is_writable() {
        let fields = validate::<Billboard>(
            &json!({ "title": "Spring sale", "created": "2025-04-01T09:30:00Z" }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap();

        assert_eq!(
            fields.created,
            Some(Utc.with_ymd_and_hms(2025, 4, 1, 9, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_issue_news_must_be_boolean() {
        let err = validate::<Billboard>(
            &json!({ "title": "Spring sale", "issue_news": 1 }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert!(err.contains("issue_news"));
    }

    #[test]
    fn test_representation_uses_relation_name_for_user() {
        let repr = BillboardRepresentation::from(Billboard {
            id: 1,
            user_id: Some(8),
            image: None,
            title: "Banner".to_string(),
            created: Utc::now(),
            location: Some("Home top".to_string()),
            issue_news: false,
            status: None,
        });

        let json = serde_json::to_value(repr).unwrap();
        assert_eq!(json["user"], 8);
        assert!(json.get("user_id").is_none());
    }
}
