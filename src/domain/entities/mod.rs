//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Mapping`] - A token → destination URL association

pub mod mapping;

pub use mapping::Mapping;
