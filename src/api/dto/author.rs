//! Author mapper. No derived fields.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::mapper::{FieldKind::*, FieldRule, RecordMapper};
use crate::domain::entities::{Author, AuthorFields};

pub const AUTHOR_FIELDS: &[FieldRule] = &[
    FieldRule::read_only("id", BigInteger),
    FieldRule::nullable("author_image", Text),
    FieldRule::required("author_name", Text),
    FieldRule::nullable("email", Text),
    FieldRule::nullable("contact_no", Text),
    FieldRule::optional("no_of_articles", Integer),
    FieldRule::nullable("status", Text),
    FieldRule::nullable("category", Text),
    FieldRule::nullable("introduction", Text),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorRepresentation {
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

impl From<Author> for AuthorRepresentation {
    fn from(a: Author) -> Self {
        Self {
            id: a.id,
            author_image: a.author_image,
            author_name: a.author_name,
            email: a.email,
            contact_no: a.contact_no,
            no_of_articles: a.no_of_articles,
            status: a.status,
            category: a.category,
            introduction: a.introduction,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AuthorSubmission {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub author_image: Option<Option<String>>,

    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub author_name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 20, message = "Ensure this field has no more than 20 characters."))]
    pub contact_no: Option<Option<String>>,

    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub no_of_articles: Option<i32>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub status: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub category: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub introduction: Option<Option<String>>,
}

impl From<AuthorSubmission> for AuthorFields {
    fn from(s: AuthorSubmission) -> Self {
        Self {
            author_image: s.author_image,
            author_name: s.author_name,
            email: s.email,
            contact_no: s.contact_no,
            no_of_articles: s.no_of_articles,
            status: s.status,
            category: s.category,
            introduction: s.introduction,
        }
    }
}

impl RecordMapper for Author {
    type Representation = AuthorRepresentation;
    type Submission = AuthorSubmission;
    const FIELDS: &'static [FieldRule] = AUTHOR_FIELDS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mapper::{ReadOnlyPolicy, WriteMode, validate};
    use serde_json::json;

    #[test]
    fn test_invalid_email() {
        let err = validate::<Author>(
            &json!({ "author_name": "A. Writer", "email": "not-an-email" }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(
            err.get("email"),
            Some(&["Enter a valid email address.".to_string()][..])
        );
    }

    #[test]
    fn test_email_may_be_cleared() {
        let fields = validate::<Author>(
            &json!({ "email": null }),
            WriteMode::Partial,
            ReadOnlyPolicy::Reject,
        )
        .unwrap();

        assert_eq!(fields.email, Some(None));
    }

    #[test]
    fn test_category_is_free_text() {
        let fields = validate::<Author>(
            &json!({ "author_name": "A. Writer", "category": "Defence", "email": "a@example.com" }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap();

        assert_eq!(fields.category, Some(Some("Defence".to_string())));
        assert_eq!(fields.email, Some(Some("a@example.com".to_string())));
    }
}
