//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for mapping persistence and the editor seam.
//!
//! # Modules
//!
//! - [`store`] - Mapping store backends (file, sqlite, memory, redis)
//! - [`editor`] - Link editor collaborator implementations

pub mod editor;
pub mod store;
