//! API route configuration.

use crate::api::handlers::{list_links_handler, preview_handler, save_links_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET /preview?url=...`      - Derive a short link without persisting
/// - `GET /items/{id}/links`     - An item's destination list with short links
/// - `PUT /items/{id}/links`     - Replace an item's destination list
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/preview", get(preview_handler))
        .route(
            "/items/{id}/links",
            get(list_links_handler).put(save_links_handler),
        )
}
