//! # golinks
//!
//! A URL-shortening redirect service built with Axum.
//!
//! Short links are content-addressed: the token is the first ten hex
//! characters of the MD5 digest of the destination URL, so the same
//! destination always yields the same `/go/{token}/` path and saving is
//! idempotent. Mappings live behind a pluggable store with four
//! interchangeable policies (consolidated file, SQLite, expiring in-memory
//! cache, Redis).
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Token derivation, entities, and store
//!   traits
//! - **Application Layer** ([`application`]) - Link service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Store backends and the
//!   editor collaborator
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional; the default backend is a JSON file store.
//! export STORE_BACKEND=sqlite
//! export DATABASE_URL="sqlite://links.db"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ShortLink};
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::repositories::{LinkEditor, MappingStore};
    pub use crate::domain::token_deriver::{Md5TokenDeriver, TokenDeriver};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
