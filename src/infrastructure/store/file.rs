//! Single-file JSON mapping store (consolidated-map policy).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Mapping store keeping the entire token → URL table in one JSON file.
///
/// The table is loaded once at startup and held in memory; every upsert
/// rewrites the whole file. Upserts are read-modify-writes of the entire
/// table, so they are serialized through the table's write lock — concurrent
/// writers cannot lose each other's updates.
///
/// This is the default backend: durable, zero external services, and fine at
/// the scale of an editorial link list.
pub struct FileStore {
    path: PathBuf,
    table: RwLock<HashMap<String, Mapping>>,
}

impl FileStore {
    /// Opens the store at `path`, creating an empty table file if missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the file exists but cannot
    /// be read or parsed, or if an empty table cannot be created.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let table = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let table: HashMap<String, Mapping> =
                    serde_json::from_str(&content).map_err(|e| {
                        AppError::store_unavailable(
                            "Failed to parse mapping table",
                            json!({ "path": path.display().to_string(), "source": e.to_string() }),
                        )
                    })?;
                info!("Loaded {} mappings from {}", table.len(), path.display());
                table
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                write_table(&path, &HashMap::new()).await?;
                info!("Created empty mapping table at {}", path.display());
                HashMap::new()
            }
            // Anything else (permissions, non-UTF-8 corruption) must not be
            // mistaken for a fresh install: replacing the file here would
            // destroy every persisted mapping.
            Err(e) => {
                return Err(AppError::store_unavailable(
                    "Failed to read mapping table",
                    json!({ "path": path.display().to_string(), "source": e.to_string() }),
                ));
            }
        };

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }
}

async fn write_table(path: &Path, table: &HashMap<String, Mapping>) -> Result<(), AppError> {
    let content = serde_json::to_string_pretty(table).map_err(|e| {
        AppError::internal(
            "Failed to serialize mapping table",
            json!({ "source": e.to_string() }),
        )
    })?;

    tokio::fs::write(path, content).await.map_err(|e| {
        AppError::store_unavailable(
            "Failed to write mapping table",
            json!({ "path": path.display().to_string(), "source": e.to_string() }),
        )
    })
}

#[async_trait]
impl MappingStore for FileStore {
    async fn upsert(&self, token: &str, target_url: &str) -> Result<(), AppError> {
        // Whole-table rewrite under the write lock: the lock is what makes
        // the read-modify-write atomic across concurrent upserts.
        let mut table = self.table.write().await;

        match table.get_mut(token) {
            Some(existing) => {
                existing.target_url = target_url.to_string();
            }
            None => {
                table.insert(
                    token.to_string(),
                    Mapping::new(token.to_string(), target_url.to_string()),
                );
            }
        }

        write_table(&self.path, &table).await
    }

    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError> {
        let table = self.table.read().await;
        Ok(table.get(token).map(|m| m.target_url.clone()))
    }

    async fn health_check(&self) -> bool {
        tokio::fs::metadata(&self.path).await.is_ok()
    }
}
