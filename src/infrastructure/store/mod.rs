//! Mapping store backends.
//!
//! Four lifecycle policies behind the single
//! [`crate::domain::repositories::MappingStore`] trait, selected by the
//! `STORE_BACKEND` configuration axis:
//!
//! - [`FileStore`] - consolidated single-file JSON map (default)
//! - [`SqliteStore`] - one durable record per mapping
//! - [`MemoryStore`] - expiring in-process map with sliding TTL
//! - [`RedisStore`] - unbounded flat key-value namespace

mod file;
mod memory;
mod redis_store;
mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;
pub use sqlite::SqliteStore;
