//! Billboard entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::Entity;

/// A promotional banner placed by a user.
///
/// Unlike most entities, `created` is an editable timestamp rather than an
/// audit column.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Billboard {
    pub id: i64,
    pub user_id: Option<i64>,
    pub image: Option<String>,
    pub title: String,
    pub created: DateTime<Utc>,
    pub location: Option<String>,
    pub issue_news: bool,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillboardFields {
    pub user_id: Option<Option<i64>>,
    pub image: Option<Option<String>>,
    pub title: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub location: Option<Option<String>>,
    pub issue_news: Option<bool>,
    pub status: Option<Option<String>>,
}

impl Entity for Billboard {
    const NAME: &'static str = "billboard";
    const TABLE: &'static str = "billboards";

    type Record = Billboard;
    type Fields = BillboardFields;

    fn record_id(record: &Billboard) -> i64 {
        record.id
    }
}
