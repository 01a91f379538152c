//! Article entity.

use chrono::NaiveDate;
use sqlx::FromRow;

use super::Entity;

/// A stored article row.
///
/// All four references are optional: an article may be filed without a
/// category, publication, magazine issue or author.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Article {
    pub id: i64,
    pub author_id: Option<i64>,
    pub publication_id: Option<i64>,
    pub magazine_id: Option<i64>,
    pub category_id: Option<i64>,
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
}

/// Values read from the records an article references.
///
/// Each value is `None` when the corresponding reference is unset.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct ArticleRelated {
    pub category_name: Option<String>,
    pub category_display_name: Option<String>,
    pub publication_name: Option<String>,
    pub publication_display_name: Option<String>,
    pub magazine_title: Option<String>,
    pub author_name: Option<String>,
    pub author_image: Option<String>,
}

/// An article joined with its related records at read time.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ArticleRecord {
    #[sqlx(flatten)]
    pub article: Article,
    #[sqlx(flatten)]
    pub related: ArticleRelated,
}

/// Validated field set for an article write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFields {
    pub author_id: Option<Option<i64>>,
    pub publication_id: Option<Option<i64>>,
    pub magazine_id: Option<Option<i64>>,
    pub category_id: Option<Option<i64>>,
    pub cover_image: Option<Option<String>>,
    pub title: Option<String>,
    pub publish_date: Option<Option<NaiveDate>>,
    pub publish_date_year: Option<Option<i32>>,
    pub publish_date_month: Option<Option<i32>>,
    pub visits: Option<i64>,
    pub issue_new: Option<bool>,
    pub status: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub section: Option<Option<String>>,
}

impl Entity for Article {
    const NAME: &'static str = "article";
    const TABLE: &'static str = "articles";

    type Record = ArticleRecord;
    type Fields = ArticleFields;

    fn record_id(record: &ArticleRecord) -> i64 {
        record.article.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_default_touches_nothing() {
        let fields = ArticleFields::default();

        assert!(fields.title.is_none());
        assert!(fields.category_id.is_none());
        assert!(fields.visits.is_none());
    }

    #[test]
    fn test_fields_distinguish_clear_from_absent() {
        let fields = ArticleFields {
            category_id: Some(None),
            ..Default::default()
        };

        assert_eq!(fields.category_id, Some(None));
        assert_eq!(fields.author_id, None);
    }
}
