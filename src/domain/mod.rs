//! Domain layer containing the stored entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Stored record types, their joined read shapes and write field sets
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain types know nothing about the JSON representation
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Mapping and validation live in [`crate::api`]; orchestration in
//!   [`crate::application::services`]

pub mod entities;
pub mod repositories;
