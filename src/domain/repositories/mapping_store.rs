//! Repository trait for token → URL mapping persistence.

use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for short-link mappings.
///
/// One contract, four selectable backend policies (see
/// [`crate::infrastructure::store`]): expiring in-memory cache, unbounded
/// Redis key-value, SQLite record-per-mapping, and a consolidated single-file
/// map. The policy is a configuration axis, not a code path callers see.
///
/// # Semantics
///
/// - `upsert` is idempotent: writing the same token twice keeps exactly one
///   live entry. Distinct URLs that collide on the same token overwrite each
///   other (last writer wins) — a documented property of the truncated hash,
///   not an error.
/// - `resolve` never fails on unknown or malformed tokens; it returns
///   `Ok(None)`, which the HTTP layer turns into a 404.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::FileStore`] - consolidated JSON map (default)
/// - [`crate::infrastructure::store::SqliteStore`] - one row per mapping
/// - [`crate::infrastructure::store::MemoryStore`] - expiring in-process map
/// - [`crate::infrastructure::store::RedisStore`] - unbounded key-value
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Creates or refreshes the mapping for `token`.
    ///
    /// Existing entries keep their original creation time; expiring backends
    /// restart the expiry window (sliding TTL).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the backend cannot be
    /// written.
    async fn upsert(&self, token: &str, target_url: &str) -> Result<(), AppError>;

    /// Looks up the destination URL for `token`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` for a live mapping
    /// - `Ok(None)` for unknown, expired, or malformed tokens
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the backend cannot be read.
    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError>;

    /// Checks if the backend is reachable.
    ///
    /// Used by the health endpoint to report store status.
    async fn health_check(&self) -> bool;
}
