//! Application layer services.
//!
//! This layer orchestrates the mappers and the repositories: it validates
//! submissions (including reference existence), persists them and projects
//! the stored result back into its representation.
//!
//! # Available Services
//!
//! - [`services::record_service::RecordService`] - read and write records of one entity type

pub mod services;
