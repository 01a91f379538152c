//! Relationship targets that stored records may reference.

use std::fmt;

/// A record type that can be the target of a foreign key.
///
/// Used by the validation rules of reference fields and by
/// [`crate::domain::repositories::ReferenceChecker`] to look targets up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    User,
    Article,
    Author,
    Publication,
    Magazine,
    Category,
}

impl Relation {
    /// Table holding records of this type.
    pub fn table(self) -> &'static str {
        match self {
            Relation::User => "users",
            Relation::Article => "articles",
            Relation::Author => "authors",
            Relation::Publication => "publications",
            Relation::Magazine => "magazines",
            Relation::Category => "categories",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relation::User => "user",
            Relation::Article => "article",
            Relation::Author => "author",
            Relation::Publication => "publication",
            Relation::Magazine => "magazine",
            Relation::Category => "category",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_tables() {
        assert_eq!(Relation::User.table(), "users");
        assert_eq!(Relation::Category.table(), "categories");
        assert_eq!(Relation::Publication.table(), "publications");
    }

    #[test]
    fn test_relation_display() {
        assert_eq!(Relation::Magazine.to_string(), "magazine");
        assert_eq!(Relation::Author.to_string(), "author");
    }
}
