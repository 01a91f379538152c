//! Repository trait definitions for the domain layer.
//!
//! These traits are the seam between the mappers and the persistence engine.
//! Concrete implementations live in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`Repository`] - joined fetch and persistence for one entity type
//! - [`ReferenceChecker`] - existence checks for submitted foreign keys
//!
//! # Testing
//!
//! [`ReferenceChecker`] is mocked via `mockall::automock`. [`Repository`] is
//! generic over the entity, so tests declare concrete mocks with
//! `mockall::mock!`. See integration tests in `tests/repository_*.rs` for the
//! Postgres behaviour.

pub mod reference_checker;
pub mod repository;

pub use reference_checker::ReferenceChecker;
pub use repository::Repository;

#[cfg(test)]
pub use reference_checker::MockReferenceChecker;
