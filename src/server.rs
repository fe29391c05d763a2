//! HTTP server initialization and runtime setup.
//!
//! Handles mapping store selection, service wiring, and Axum server
//! lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::MappingStore;
use crate::domain::token_deriver::Md5TokenDeriver;
use crate::infrastructure::editor::InMemoryLinkEditor;
use crate::infrastructure::store::{FileStore, MemoryStore, RedisStore, SqliteStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured mapping store backend
/// - The link service (MD5 token deriver, in-memory editor collaborator)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The store backend cannot be opened or reached
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let link_service = Arc::new(LinkService::new(
        store.clone(),
        Arc::new(InMemoryLinkEditor::new()),
        Arc::new(Md5TokenDeriver),
        config.base_url.clone(),
    ));

    let state = AppState::new(link_service, store);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Opens the mapping store selected by `STORE_BACKEND`.
async fn build_store(config: &Config) -> Result<Arc<dyn MappingStore>> {
    let store: Arc<dyn MappingStore> = match config.store_backend.as_str() {
        "file" => {
            let store = FileStore::open(&config.store_file).await?;
            tracing::info!("Mapping store: file ({})", config.store_file);
            Arc::new(store)
        }
        "sqlite" => {
            let store = SqliteStore::connect(&config.database_url).await?;
            tracing::info!("Mapping store: sqlite ({})", config.database_url);
            Arc::new(store)
        }
        "memory" => {
            tracing::info!(
                "Mapping store: memory (ttl: {}s)",
                config.mapping_ttl_seconds
            );
            Arc::new(MemoryStore::new(config.mapping_ttl_seconds))
        }
        "redis" => {
            // Presence is enforced by Config::validate.
            let redis_url = config.redis_url.as_deref().unwrap_or_default();
            let store = RedisStore::connect(redis_url).await?;
            tracing::info!("Mapping store: redis");
            Arc::new(store)
        }
        other => anyhow::bail!("Unknown store backend '{}'", other),
    };

    Ok(store)
}
