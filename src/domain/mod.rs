//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Persistence trait definitions
//! - [`token_deriver`] - Deterministic URL → token derivation
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business logic is orchestrated in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod token_deriver;
