//! Article mapper.
//!
//! Derived fields come from four relations: category, publication, magazine
//! and author. Only `title` is required on write.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::mapper::{FieldKind::*, FieldRule, RecordMapper};
use crate::domain::entities::{Article, ArticleFields, ArticleRecord, Relation};

pub const ARTICLE_FIELDS: &[FieldRule] = &[
    FieldRule::read_only("id", BigInteger),
    FieldRule::nullable("author", Reference(Relation::Author)),
    FieldRule::nullable("publication", Reference(Relation::Publication)),
    FieldRule::nullable("magazine", Reference(Relation::Magazine)),
    FieldRule::nullable("category", Reference(Relation::Category)),
    FieldRule::read_only("category_name", Text),
    FieldRule::read_only("category_display_name", Text),
    FieldRule::read_only("publication_name", Text),
    FieldRule::read_only("publication_display_name", Text),
    FieldRule::read_only("magazine_title", Text),
    FieldRule::nullable("cover_image", Text),
    FieldRule::required("title", Text),
    FieldRule::nullable("publish_date", Date),
    FieldRule::nullable("publish_date_year", Integer),
    FieldRule::nullable("publish_date_month", Integer),
    FieldRule::optional("visits", BigInteger),
    FieldRule::optional("issue_new", Boolean),
    FieldRule::nullable("status", Text),
    FieldRule::nullable("description", Text),
    FieldRule::nullable("section", Text),
    FieldRule::read_only("author_name", Text),
    FieldRule::read_only("author_image", Text),
];

/// Flat article representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleRepresentation {
    pub id: i64,
    pub author: Option<i64>,
    pub publication: Option<i64>,
    pub magazine: Option<i64>,
    pub category: Option<i64>,
    pub category_name: Option<String>,
    pub category_display_name: Option<String>,
    pub publication_name: Option<String>,
    pub publication_display_name: Option<String>,
    pub magazine_title: Option<String>,
    pub cover_image: Option<String>,
    pub title: String,
    pub publish_date: Option<NaiveDate>,
    pub publish_date_year: Option<i32>,
    pub publish_date_month: Option<i32>,
    pub visits: i64,
    pub issue_new: bool,
    pub status: Option<String>,
    pub description: Option<String>,
    pub section: Option<String>,
    pub author_name: Option<String>,
    pub author_image: Option<String>,
}

impl From<ArticleRecord> for ArticleRepresentation {
    fn from(record: ArticleRecord) -> Self {
        let ArticleRecord { article, related } = record;
        Self {
            id: article.id,
            author: article.author_id,
            publication: article.publication_id,
            magazine: article.magazine_id,
            category: article.category_id,
            category_name: related.category_name,
            category_display_name: related.category_display_name,
            publication_name: related.publication_name,
            publication_display_name: related.publication_display_name,
            magazine_title: related.magazine_title,
            cover_image: article.cover_image,
            title: article.title,
            publish_date: article.publish_date,
            publish_date_year: article.publish_date_year,
            publish_date_month: article.publish_date_month,
            visits: article.visits,
            issue_new: article.issue_new,
            status: article.status,
            description: article.description,
            section: article.section,
            author_name: related.author_name,
            author_image: related.author_image,
        }
    }
}

/// Writable article fields as submitted.
///
/// Nullable fields use a double `Option`: absent = untouched, `null` = clear.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ArticleSubmission {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub author: Option<Option<i64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub publication: Option<Option<i64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub magazine: Option<Option<i64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category: Option<Option<i64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub cover_image: Option<Option<String>>,

    #[validate(length(max = 500, message = "Ensure this field has no more than 500 characters."))]
    pub title: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub publish_date: Option<Option<NaiveDate>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(range(min = 1900, max = 2200, message = "Ensure this value is between 1900 and 2200."))]
    pub publish_date_year: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(range(min = 1, max = 12, message = "Ensure this value is between 1 and 12."))]
    pub publish_date_month: Option<Option<i32>>,

    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub visits: Option<i64>,

    pub issue_new: Option<bool>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub status: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub section: Option<Option<String>>,
}

impl From<ArticleSubmission> for ArticleFields {
    fn from(s: ArticleSubmission) -> Self {
        Self {
            author_id: s.author,
            publication_id: s.publication,
            magazine_id: s.magazine,
            category_id: s.category,
            cover_image: s.cover_image,
            title: s.title,
            publish_date: s.publish_date,
            publish_date_year: s.publish_date_year,
            publish_date_month: s.publish_date_month,
            visits: s.visits,
            issue_new: s.issue_new,
            status: s.status,
            description: s.description,
            section: s.section,
        }
    }
}

impl RecordMapper for Article {
    type Representation = ArticleRepresentation;
    type Submission = ArticleSubmission;
    const FIELDS: &'static [FieldRule] = ARTICLE_FIELDS;
}
