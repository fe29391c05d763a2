//! Short-link derivation, persistence, and destination list orchestration.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::{LinkEditor, MappingStore};
use crate::domain::token_deriver::{TokenDeriver, ensure_scheme};
use crate::error::AppError;
use crate::utils::destination::{clean_destinations, validate_destination};

/// A derived short link ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    /// The coerced destination URL the short link redirects to.
    pub target_url: String,
    /// The 10-character token embedded in the public path.
    pub token: String,
    /// The full public URL, `{base_url}/go/{token}/`.
    pub short_url: String,
}

/// Service tying the token deriver, the mapping store, and the editor
/// collaborator together.
///
/// All components are injected once at startup; in particular the deriver is
/// a strategy an embedding host may replace (see
/// [`crate::domain::token_deriver::TokenDeriver`]).
pub struct LinkService {
    store: Arc<dyn MappingStore>,
    editor: Arc<dyn LinkEditor>,
    deriver: Arc<dyn TokenDeriver>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        store: Arc<dyn MappingStore>,
        editor: Arc<dyn LinkEditor>,
        deriver: Arc<dyn TokenDeriver>,
        base_url: String,
    ) -> Self {
        Self {
            store,
            editor,
            deriver,
            base_url,
        }
    }

    /// Constructs the full public short URL for a token.
    pub fn short_url(&self, token: &str) -> String {
        format!("{}/go/{}/", self.base_url.trim_end_matches('/'), token)
    }

    /// Derives the short link for a candidate URL without touching the store.
    ///
    /// Exactly matches what [`Self::put`] would persist for the same input,
    /// including scheme coercion — the preview shown while editing must not
    /// diverge from the authoritative save.
    pub fn preview(&self, raw_url: &str) -> ShortLink {
        let target_url = ensure_scheme(raw_url.trim());
        let token = self.deriver.derive(&target_url);
        let short_url = self.short_url(&token);
        ShortLink {
            target_url,
            token,
            short_url,
        }
    }

    /// Creates or refreshes the mapping for a destination URL.
    ///
    /// Idempotent: the token is a pure function of the URL, so re-putting the
    /// same destination overwrites the same entry (and restarts the expiry
    /// window under the expiring store policy).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input cannot be coerced into
    /// an absolute URL, and [`AppError::StoreUnavailable`] if the mapping
    /// cannot be written.
    pub async fn put(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        let target_url = validate_destination(raw_url).map_err(|e| {
            AppError::bad_request("Invalid destination URL", json!({ "reason": e.to_string() }))
        })?;

        let token = self.deriver.derive(&target_url);
        self.store.upsert(&token, &target_url).await?;

        let short_url = self.short_url(&token);
        Ok(ShortLink {
            target_url,
            token,
            short_url,
        })
    }

    /// Resolves a token to its destination URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown or expired tokens and
    /// [`AppError::StoreUnavailable`] if the store cannot be read.
    pub async fn resolve(&self, token: &str) -> Result<String, AppError> {
        self.store
            .resolve(token)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "token": token })))
    }

    /// Saves an item's destination list and issues short links for it.
    ///
    /// Entries are cleaned first (trimmed, scheme-coerced, invalid ones
    /// dropped silently); the surviving list replaces the item's previous
    /// list wholesale, and an empty result removes it. Mappings are upserted
    /// before the list is persisted, so a store failure aborts the save
    /// without replacing the list; already-refreshed mappings are idempotent
    /// and harmless.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if a mapping or the list cannot
    /// be persisted. Invalid entries are not errors.
    pub async fn save_destinations(
        &self,
        item_id: i64,
        raw_urls: Vec<String>,
    ) -> Result<Vec<ShortLink>, AppError> {
        let cleaned = clean_destinations(&raw_urls);

        let mut links = Vec::with_capacity(cleaned.len());
        for url in &cleaned {
            links.push(self.put(url).await?);
        }

        self.editor.save_destination_urls(item_id, cleaned).await?;

        Ok(links)
    }

    /// Returns an item's destination list with current short links.
    ///
    /// Re-puts every entry, which refreshes the expiry window under the
    /// expiring store policy — rendering the editor keeps its links alive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the list cannot be read or a
    /// mapping cannot be refreshed.
    pub async fn list_destinations(&self, item_id: i64) -> Result<Vec<ShortLink>, AppError> {
        let urls = self.editor.list_destination_urls(item_id).await?;

        let mut links = Vec::with_capacity(urls.len());
        for url in &urls {
            links.push(self.put(url).await?);
        }

        Ok(links)
    }
}
