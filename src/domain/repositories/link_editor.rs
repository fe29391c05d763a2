//! Collaborator trait for per-item destination list persistence.

use crate::error::AppError;
use async_trait::async_trait;

/// Interface to the external link editor hosting this service.
///
/// The editor owns the ordered destination lists of content items; this
/// service only reads and replaces them while issuing short links. The
/// bundled [`crate::infrastructure::editor::InMemoryLinkEditor`] stands in
/// for the real host so the service runs standalone.
///
/// # Semantics
///
/// - A list belongs to exactly one content item.
/// - Saves replace the list wholesale; insertion order is meaningful and
///   duplicates are allowed.
/// - Saving an empty list removes the item's list entirely and is not an
///   error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkEditor: Send + Sync {
    /// Returns the item's destination URLs, empty if none were saved.
    async fn list_destination_urls(&self, item_id: i64) -> Result<Vec<String>, AppError>;

    /// Replaces the item's destination list. An empty `urls` deletes it.
    async fn save_destination_urls(&self, item_id: i64, urls: Vec<String>)
    -> Result<(), AppError>;
}
