//! Repository trait definitions for the domain layer.
//!
//! Traits define the contracts for persistence and for the external editor
//! collaborator; concrete implementations live in
//! `crate::infrastructure`. Mock implementations are auto-generated via
//! `mockall` for testing.
//!
//! # Available Traits
//!
//! - [`MappingStore`] - token → URL mapping persistence
//! - [`LinkEditor`] - per-item destination list persistence (external seam)

pub mod link_editor;
pub mod mapping_store;

pub use link_editor::LinkEditor;
pub use mapping_store::MappingStore;

#[cfg(test)]
pub use link_editor::MockLinkEditor;
#[cfg(test)]
pub use mapping_store::MockMappingStore;
