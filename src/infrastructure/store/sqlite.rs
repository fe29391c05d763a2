//! SQLite mapping store (record-per-mapping policy).

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// SQLite-backed store keeping one durable row per mapping.
///
/// The token is the primary key, which is exactly the lookup-by-identifier
/// shape of the record-per-mapping policy: `resolve` is a single indexed
/// read, `upsert` a single `INSERT .. ON CONFLICT` that keeps the original
/// creation time.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connects to the database at `database_url` (e.g. `sqlite://links.db`),
    /// creating the file if missing, and applies migrations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the database cannot be
    /// opened or migrated.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(sqlx::Error::from)?;

        info!("Connected to SQLite mapping store at {}", database_url);
        Ok(Self { pool })
    }
}

#[async_trait]
impl MappingStore for SqliteStore {
    async fn upsert(&self, token: &str, target_url: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO mappings (token, target_url, created_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(token) DO UPDATE SET target_url = excluded.target_url
            "#,
        )
        .bind(token)
        .bind(target_url)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError> {
        let target_url: Option<String> =
            sqlx::query_scalar("SELECT target_url FROM mappings WHERE token = ?1")
                .bind(token)
                .fetch_optional(&self.pool)
                .await?;

        Ok(target_url)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn open_test_store(dir: &tempfile::TempDir) -> SqliteStore {
        let url = format!("sqlite://{}", dir.path().join("mappings.db").display());
        SqliteStore::connect(&url).await.unwrap()
    }

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempdir().unwrap();
        let store = open_test_store(&dir).await;

        store
            .upsert("a9b9f04336", "http://example.com")
            .await
            .unwrap();

        let resolved = store.resolve("a9b9f04336").await.unwrap();
        assert_eq!(resolved.as_deref(), Some("http://example.com"));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_none() {
        let dir = tempdir().unwrap();
        let store = open_test_store(&dir).await;

        assert_eq!(store.resolve("0000000000").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_keeps_single_row() {
        let dir = tempdir().unwrap();
        let store = open_test_store(&dir).await;

        store.upsert("c0111de111", "https://first.example").await.unwrap();
        store.upsert("c0111de111", "https://second.example").await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mappings")
            .fetch_one(&store.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);

        assert_eq!(
            store.resolve("c0111de111").await.unwrap().as_deref(),
            Some("https://second.example")
        );
    }

    #[tokio::test]
    async fn test_upsert_preserves_created_at() {
        let dir = tempdir().unwrap();
        let store = open_test_store(&dir).await;

        store.upsert("abcdef0123", "https://example.com").await.unwrap();
        let first: String = sqlx::query_scalar("SELECT created_at FROM mappings WHERE token = ?1")
            .bind("abcdef0123")
            .fetch_one(&store.pool)
            .await
            .unwrap();

        store.upsert("abcdef0123", "https://example.com").await.unwrap();
        let second: String = sqlx::query_scalar("SELECT created_at FROM mappings WHERE token = ?1")
            .bind("abcdef0123")
            .fetch_one(&store.pool)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempdir().unwrap();
        let store = open_test_store(&dir).await;
        assert!(store.health_check().await);
    }
}
