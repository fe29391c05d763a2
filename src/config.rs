//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base URL used to build short links
//!   (default: `http://localhost:3000`)
//! - `STORE_BACKEND` - Mapping store policy: `file`, `sqlite`, `memory`, or
//!   `redis` (default: `file`)
//! - `STORE_FILE` - Path of the consolidated map file for the `file` backend
//!   (default: `links.json`)
//! - `DATABASE_URL` - SQLite URL for the `sqlite` backend
//!   (default: `sqlite://links.db`)
//! - `REDIS_URL` - Redis connection string; required by the `redis` backend
//! - `MAPPING_TTL_SECONDS` - Sliding expiry window of the `memory` backend
//!   (default: 2592000, i.e. 30 days)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Mapping store backends selectable via `STORE_BACKEND`.
pub const STORE_BACKENDS: [&str; 4] = ["file", "sqlite", "memory", "redis"];

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL prefixed to `/go/{token}/` when building short links.
    pub base_url: String,
    /// Selected mapping store policy, one of [`STORE_BACKENDS`].
    pub store_backend: String,
    pub store_file: String,
    pub database_url: String,
    pub redis_url: Option<String>,
    /// Sliding TTL applied by the `memory` backend. The permanent backends
    /// ignore it.
    pub mapping_ttl_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let store_backend = env::var("STORE_BACKEND").unwrap_or_else(|_| "file".to_string());
        let store_file = env::var("STORE_FILE").unwrap_or_else(|_| "links.json".to_string());
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://links.db".to_string());
        let redis_url = env::var("REDIS_URL").ok();

        let mapping_ttl_seconds = env::var("MAPPING_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30 * 24 * 60 * 60);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            base_url,
            store_backend,
            store_file,
            database_url,
            redis_url,
            mapping_ttl_seconds,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `store_backend` is not one of [`STORE_BACKENDS`]
    /// - the `redis` backend is selected without `REDIS_URL`
    /// - `mapping_ttl_seconds` is zero
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` or `base_url` is malformed
    pub fn validate(&self) -> Result<()> {
        if !STORE_BACKENDS.contains(&self.store_backend.as_str()) {
            anyhow::bail!(
                "STORE_BACKEND must be one of {:?}, got '{}'",
                STORE_BACKENDS,
                self.store_backend
            );
        }

        if self.store_backend == "redis" && self.redis_url.is_none() {
            anyhow::bail!("REDIS_URL must be set when STORE_BACKEND is 'redis'");
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                redis_url
            );
        }

        if self.store_backend == "sqlite" && !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.mapping_ttl_seconds == 0 {
            anyhow::bail!("MAPPING_TTL_SECONDS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);

        match self.store_backend.as_str() {
            "file" => tracing::info!("  Store: file ({})", self.store_file),
            "sqlite" => tracing::info!("  Store: sqlite ({})", self.database_url),
            "memory" => tracing::info!(
                "  Store: memory (ttl: {}s)",
                self.mapping_ttl_seconds
            ),
            "redis" => tracing::info!(
                "  Store: redis ({})",
                self.redis_url
                    .as_deref()
                    .map(mask_connection_string)
                    .unwrap_or_default()
            ),
            _ => {}
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks the password in connection strings for logging, e.g.
/// `redis://:password@host:6379/0` → `redis://:***@host:6379/0`.
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
