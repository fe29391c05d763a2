//! Link editor collaborator implementations.
//!
//! The real editor lives in the host content system; see
//! [`crate::domain::repositories::LinkEditor`] for the seam.

mod memory;

pub use memory::InMemoryLinkEditor;
