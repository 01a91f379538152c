//! Representation layer: what records look like on the way out and what a
//! submission must look like on the way in.
//!
//! # Modules
//!
//! - [`mapper`] - rule-table engine shared by all entities
//! - [`dto`] - per-entity representations, submissions and rule tables

pub mod dto;
pub mod mapper;

pub use mapper::{FieldKind, FieldRule, ReadOnlyPolicy, RecordMapper, WriteMode};
