//! In-process stand-in for the external link editor.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::LinkEditor;
use crate::error::AppError;

/// Destination list storage held in process memory.
///
/// In production the [`LinkEditor`] seam is expected to be implemented by the
/// host content system; this implementation keeps the service runnable and
/// testable standalone.
///
/// # Use Cases
///
/// - Development and demo deployments without a host CMS
/// - Integration tests exercising the save/list flow
#[derive(Default)]
pub struct InMemoryLinkEditor {
    lists: RwLock<HashMap<i64, Vec<String>>>,
}

impl InMemoryLinkEditor {
    /// Creates an empty editor.
    pub fn new() -> Self {
        debug!("Using InMemoryLinkEditor");
        Self::default()
    }
}

#[async_trait]
impl LinkEditor for InMemoryLinkEditor {
    async fn list_destination_urls(&self, item_id: i64) -> Result<Vec<String>, AppError> {
        let lists = self.lists.read().await;
        Ok(lists.get(&item_id).cloned().unwrap_or_default())
    }

    async fn save_destination_urls(
        &self,
        item_id: i64,
        urls: Vec<String>,
    ) -> Result<(), AppError> {
        let mut lists = self.lists.write().await;
        if urls.is_empty() {
            lists.remove(&item_id);
        } else {
            lists.insert(item_id, urls);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_is_empty_before_any_save() {
        let editor = InMemoryLinkEditor::new();
        assert!(editor.list_destination_urls(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_wholesale() {
        let editor = InMemoryLinkEditor::new();

        editor
            .save_destination_urls(1, vec!["https://a.example".into(), "https://b.example".into()])
            .await
            .unwrap();
        editor
            .save_destination_urls(1, vec!["https://c.example".into()])
            .await
            .unwrap();

        assert_eq!(
            editor.list_destination_urls(1).await.unwrap(),
            vec!["https://c.example"]
        );
    }

    #[tokio::test]
    async fn test_empty_save_removes_list() {
        let editor = InMemoryLinkEditor::new();

        editor
            .save_destination_urls(1, vec!["https://a.example".into()])
            .await
            .unwrap();
        editor.save_destination_urls(1, vec![]).await.unwrap();

        assert!(editor.list_destination_urls(1).await.unwrap().is_empty());
        assert!(editor.lists.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_lists_are_per_item() {
        let editor = InMemoryLinkEditor::new();

        editor
            .save_destination_urls(1, vec!["https://a.example".into()])
            .await
            .unwrap();
        editor
            .save_destination_urls(2, vec!["https://b.example".into()])
            .await
            .unwrap();

        assert_eq!(
            editor.list_destination_urls(1).await.unwrap(),
            vec!["https://a.example"]
        );
        assert_eq!(
            editor.list_destination_urls(2).await.unwrap(),
            vec!["https://b.example"]
        );
    }
}
