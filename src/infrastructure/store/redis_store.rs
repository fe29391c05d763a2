//! Redis mapping store (unbounded key-value policy).

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Redis-backed store keeping every mapping under a flat `go:{token}`
/// namespace with no expiry.
///
/// Unlike a cache in front of a database, this is the store of record:
/// read and write failures propagate as [`AppError::StoreUnavailable`]
/// instead of degrading to a miss.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse.
/// Namespace prefix keeping mapping keys apart from other tenants of the
/// same Redis instance.
const KEY_PREFIX: &str = "go:";

pub struct RedisStore {
    client: ConnectionManager,
}

/// Constructs the full Redis key with namespace prefix.
fn build_key(token: &str) -> String {
    format!("{KEY_PREFIX}{token}")
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl MappingStore for RedisStore {
    async fn upsert(&self, token: &str, target_url: &str) -> Result<(), AppError> {
        let key = build_key(token);
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(&key, target_url).await?;
        debug!("Store SET: {} -> {}", token, target_url);

        Ok(())
    }

    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError> {
        let key = build_key(token);
        let mut conn = self.client.clone();

        let target_url: Option<String> = conn.get(&key).await?;
        Ok(target_url)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
