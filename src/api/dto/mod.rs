//! Per-entity record mappers.
//!
//! Each module declares, for one entity:
//!
//! - its rule table (`*_FIELDS`)
//! - the flat `*Representation` produced from a joined record
//! - the typed `*Submission` accepted on write, with `validator` rules
//! - the `RecordMapper` impl tying them to the entity
//!
//! Representations serialize with serde; dates as `YYYY-MM-DD`, datetimes as
//! RFC 3339.

pub mod article;
pub mod author;
pub mod billboard;
pub mod category;
pub mod comment;
pub mod contributor;
pub mod ebook;
pub mod magazine;
pub mod publication;
pub mod video;

pub use article::{ArticleRepresentation, ArticleSubmission};
pub use author::{AuthorRepresentation, AuthorSubmission};
pub use billboard::{BillboardRepresentation, BillboardSubmission};
pub use category::{CategoryRepresentation, CategorySubmission};
pub use comment::{CommentRepresentation, CommentSubmission};
pub use contributor::{ContributorRepresentation, ContributorSubmission};
pub use ebook::{EbookRepresentation, EbookSubmission};
pub use magazine::{MagazineRepresentation, MagazineSubmission};
pub use publication::{PublicationRepresentation, PublicationSubmission};
pub use video::{VideoRepresentation, VideoSubmission};
