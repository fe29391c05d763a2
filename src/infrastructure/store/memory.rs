//! In-memory mapping store with sliding expiration (expiring-cache policy).

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Expiring in-process mapping store.
///
/// Every [`MappingStore::upsert`] restamps `expires_at = now + ttl`, so a
/// mapping stays alive as long as its content item keeps being saved or
/// rendered (sliding window). Expired entries resolve to `None` and are
/// reaped lazily on access; nothing survives a process restart.
///
/// # Use Cases
///
/// - The original time-limited lifecycle policy (30-day window by default)
/// - Tests and development without any external backend
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Mapping>>,
    ttl: Duration,
}

impl MemoryStore {
    /// Creates an empty store whose entries live for `ttl_seconds` after
    /// their last upsert.
    pub fn new(ttl_seconds: u64) -> Self {
        debug!("Using MemoryStore (ttl: {}s)", ttl_seconds);
        // A window too large for chrono saturates instead of wrapping; the
        // expiry stamp below then comes out as "never".
        let ttl = i64::try_from(ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn upsert(&self, token: &str, target_url: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;

        let created_at = entries
            .get(token)
            .filter(|existing| !existing.is_expired())
            .map(|existing| existing.created_at)
            .unwrap_or_else(Utc::now);

        entries.insert(
            token.to_string(),
            Mapping {
                token: token.to_string(),
                target_url: target_url.to_string(),
                created_at,
                // None when now + ttl is out of range: never expires.
                expires_at: Utc::now().checked_add_signed(self.ttl),
            },
        );

        Ok(())
    }

    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError> {
        {
            let entries = self.entries.read().await;
            match entries.get(token) {
                Some(mapping) if !mapping.is_expired() => {
                    return Ok(Some(mapping.target_url.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Entry exists but is past its window: reap it under the write lock.
        let mut entries = self.entries.write().await;
        if entries.get(token).is_some_and(|m| m.is_expired()) {
            entries.remove(token);
            debug!("Reaped expired mapping: {}", token);
        }
        Ok(None)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL_30_DAYS: u64 = 30 * 24 * 60 * 60;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryStore::new(TTL_30_DAYS);

        store
            .upsert("a9b9f04336", "http://example.com")
            .await
            .unwrap();

        let resolved = store.resolve("a9b9f04336").await.unwrap();
        assert_eq!(resolved.as_deref(), Some("http://example.com"));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_none() {
        let store = MemoryStore::new(TTL_30_DAYS);
        assert_eq!(store.resolve("0000000000").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let store = MemoryStore::new(TTL_30_DAYS);

        store
            .upsert("a9b9f04336", "http://example.com")
            .await
            .unwrap();
        store
            .upsert("a9b9f04336", "http://example.com")
            .await
            .unwrap();

        let entries = store.entries.read().await;
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_collision_last_write_wins() {
        let store = MemoryStore::new(TTL_30_DAYS);

        store.upsert("c0111de111", "https://first.example").await.unwrap();
        store.upsert("c0111de111", "https://second.example").await.unwrap();

        let resolved = store.resolve("c0111de111").await.unwrap();
        assert_eq!(resolved.as_deref(), Some("https://second.example"));
    }

    #[tokio::test]
    async fn test_upsert_preserves_created_at() {
        let store = MemoryStore::new(TTL_30_DAYS);

        store.upsert("abcdef0123", "https://example.com").await.unwrap();
        let first_created = store.entries.read().await["abcdef0123"].created_at;

        store.upsert("abcdef0123", "https://example.com").await.unwrap();
        let second_created = store.entries.read().await["abcdef0123"].created_at;

        assert_eq!(first_created, second_created);
    }

    #[tokio::test]
    async fn test_expired_entry_resolves_to_none_and_is_reaped() {
        let store = MemoryStore::new(0);

        store.upsert("abcdef0123", "https://example.com").await.unwrap();

        assert_eq!(store.resolve("abcdef0123").await.unwrap(), None);
        assert!(store.entries.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_huge_ttl_saturates_instead_of_wrapping() {
        let store = MemoryStore::new(u64::MAX);

        store.upsert("abcdef0123", "https://example.com").await.unwrap();

        assert_eq!(
            store.resolve("abcdef0123").await.unwrap().as_deref(),
            Some("https://example.com")
        );
    }

    #[tokio::test]
    async fn test_upsert_refreshes_expiry_window() {
        let store = MemoryStore::new(TTL_30_DAYS);

        store.upsert("abcdef0123", "https://example.com").await.unwrap();
        let first_expiry = store.entries.read().await["abcdef0123"].expires_at;

        store.upsert("abcdef0123", "https://example.com").await.unwrap();
        let second_expiry = store.entries.read().await["abcdef0123"].expires_at;

        assert!(second_expiry >= first_expiry);
    }
}
