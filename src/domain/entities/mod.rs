//! Core domain entities representing the stored CMS records.
//!
//! Each entity comes as a small family of plain data structures:
//!
//! - the stored row itself (e.g. [`Article`]) with its own columns and
//!   foreign-key ids
//! - for entities with derived fields, a `*Related` struct holding values
//!   fetched across one relationship hop, and a `*Record` pairing the two
//! - a `*Fields` struct: the validated field set produced by a write, ready
//!   to be persisted
//!
//! # Fields semantics
//!
//! Every member of a `*Fields` struct is optional. `None` means "not
//! submitted": on insert the column default applies, on update the stored
//! value is kept. Nullable columns use `Option<Option<T>>` so that an
//! explicit `null` (`Some(None)`) can clear the column.
//!
//! # Entity Types
//!
//! - [`Comment`] - reader comment on an article, written by a user
//! - [`Article`] - a published piece, optionally filed under a category,
//!   publication, magazine issue and author
//! - [`Billboard`] - promotional banner
//! - [`Magazine`] - a magazine issue belonging to a publication
//! - [`Ebook`] - downloadable e-book
//! - [`Author`] - article author profile
//! - [`Video`] - embedded YouTube video
//! - [`Publication`] - top-level publication (brand)
//! - [`Category`] - article category within a publication
//! - [`Contributor`] - editorial team member of a publication

pub mod article;
pub mod author;
pub mod billboard;
pub mod category;
pub mod comment;
pub mod contributor;
pub mod ebook;
pub mod magazine;
pub mod publication;
pub mod relation;
pub mod video;

pub use article::{Article, ArticleFields, ArticleRecord, ArticleRelated};
pub use author::{Author, AuthorFields};
pub use billboard::{Billboard, BillboardFields};
pub use category::{Category, CategoryFields, CategoryRecord, CategoryRelated};
pub use comment::{Comment, CommentFields, CommentRecord, CommentRelated};
pub use contributor::{Contributor, ContributorFields, ContributorRecord, ContributorRelated};
pub use ebook::{Ebook, EbookFields};
pub use magazine::{Magazine, MagazineFields, MagazineRecord, MagazineRelated};
pub use publication::{Publication, PublicationFields};
pub use relation::Relation;
pub use video::{Video, VideoFields};

/// A stored entity type.
///
/// Implemented on the row struct of each entity. Ties the entity to the shape
/// it is read as (`Record`) and the shape a validated write produces (`Fields`).
pub trait Entity: Send + Sync + 'static {
    /// Human-readable singular name, used in messages and logs.
    const NAME: &'static str;

    /// Backing table.
    const TABLE: &'static str;

    /// The stored row joined with its one-hop relations.
    type Record: Clone + Send + Sync + 'static;

    /// Validated field set produced by a write.
    type Fields: Clone + Send + Sync + 'static;

    /// Primary key of a fetched record.
    fn record_id(record: &Self::Record) -> i64;
}
