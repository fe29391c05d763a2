//! Handler for the short link preview endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::preview::{PreviewQuery, PreviewResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Derives the short link for a candidate URL without persisting anything.
///
/// # Endpoint
///
/// `GET /api/preview?url=...`
///
/// The result is exactly what a save of the same input would produce, so an
/// editor can display the short URL while the destination is still being
/// typed.
///
/// # Response
///
/// ```json
/// {
///   "target_url": "https://example.com",
///   "token": "c984d06aaf",
///   "short_url": "http://localhost:3000/go/c984d06aaf/"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is empty or whitespace.
pub async fn preview_handler(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<PreviewResponse>, AppError> {
    let raw = query.url.trim();
    if raw.is_empty() {
        return Err(AppError::bad_request(
            "Destination URL must not be empty",
            json!({}),
        ));
    }

    let link = state.link_service.preview(raw);

    Ok(Json(PreviewResponse {
        target_url: link.target_url,
        token: link.token,
        short_url: link.short_url,
    }))
}
