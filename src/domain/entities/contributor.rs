//! Contributor entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::Entity;

/// An editorial team member listed on a publication's masthead.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Contributor {
    pub id: i64,
    pub publication_id: Option<i64>,
    pub name: String,
    pub designation: Option<String>,
    pub about: Option<String>,
    pub cover_image: Option<String>,
    pub order: i32,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct ContributorRelated {
    pub publication_name: Option<String>,
    pub publication_display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ContributorRecord {
    #[sqlx(flatten)]
    pub contributor: Contributor,
    #[sqlx(flatten)]
    pub related: ContributorRelated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributorFields {
    pub publication_id: Option<Option<i64>>,
    pub name: Option<String>,
    pub designation: Option<Option<String>>,
    pub about: Option<Option<String>>,
    pub cover_image: Option<Option<String>>,
    pub order: Option<i32>,
    pub status: Option<Option<String>>,
}

impl Entity for Contributor {
    const NAME: &'static str = "contributor";
    const TABLE: &'static str = "contributors";

    type Record = ContributorRecord;
    type Fields = ContributorFields;

    fn record_id(record: &ContributorRecord) -> i64 {
        record.contributor.id
    }
}
