//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the token
//! deriver, the mapping store, and the editor collaborator. Services consume
//! domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link derivation,
//!   persistence, and destination list management

pub mod services;
