//! Utility functions shared by the mappers.
//!
//! - [`youtube`] - YouTube URL parsing and thumbnail derivation

pub mod youtube;
