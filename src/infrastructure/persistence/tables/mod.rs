//! [`PgEntity`](super::PgEntity) impls, one module per table.

mod articles;
mod authors;
mod billboards;
mod categories;
mod comments;
mod contributors;
mod ebooks;
mod magazines;
mod publications;
mod videos;
