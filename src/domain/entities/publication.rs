//! Publication entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::Entity;

/// A top-level publication.
///
/// `name` is the unique URL-safe handle (e.g. `hilal-english`);
/// `display_name` is what readers see.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Publication {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationFields {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub cover_image: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub status: Option<Option<String>>,
}

impl Entity for Publication {
    const NAME: &'static str = "publication";
    const TABLE: &'static str = "publications";

    type Record = Publication;
    type Fields = PublicationFields;

    fn record_id(record: &Publication) -> i64 {
        record.id
    }
}
