//! Handlers for per-item destination list endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::links::{LinksResponse, SaveLinksRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Replaces an item's destination list and issues short links for it.
///
/// # Endpoint
///
/// `PUT /api/items/{id}/links`
///
/// # Request Body
///
/// ```json
/// { "urls": ["example.com", "https://rust-lang.org"] }
/// ```
///
/// Entries are trimmed and scheme-coerced; invalid ones are dropped silently
/// rather than failing the save. An empty surviving list removes the item's
/// destinations.
///
/// # Errors
///
/// Returns 503 Service Unavailable if the mapping store rejects a write; the
/// previous list is left in place.
pub async fn save_links_handler(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(payload): Json<SaveLinksRequest>,
) -> Result<Json<LinksResponse>, AppError> {
    let links = state
        .link_service
        .save_destinations(item_id, payload.urls)
        .await?;

    Ok(Json(LinksResponse::new(item_id, links)))
}

/// Returns an item's destination list with current short links.
///
/// # Endpoint
///
/// `GET /api/items/{id}/links`
///
/// Listing re-derives every short link and refreshes the mappings, so under
/// the expiring store policy rendering an editor keeps its links alive.
///
/// # Errors
///
/// Returns 503 Service Unavailable if the list cannot be read or a mapping
/// cannot be refreshed.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<LinksResponse>, AppError> {
    let links = state.link_service.list_destinations(item_id).await?;

    Ok(Json(LinksResponse::new(item_id, links)))
}
