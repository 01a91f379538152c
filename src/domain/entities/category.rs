//! Category entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::Entity;

/// An article category scoped to a publication.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub publication_id: Option<i64>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct CategoryRelated {
    pub publication_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CategoryRecord {
    #[sqlx(flatten)]
    pub category: Category,
    #[sqlx(flatten)]
    pub related: CategoryRelated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFields {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub publication_id: Option<Option<i64>>,
    pub status: Option<Option<String>>,
}

impl Entity for Category {
    const NAME: &'static str = "category";
    const TABLE: &'static str = "categories";

    type Record = CategoryRecord;
    type Fields = CategoryFields;

    fn record_id(record: &CategoryRecord) -> i64 {
        record.category.id
    }
}
