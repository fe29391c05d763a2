//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// `X-Robots-Tag` header name.
pub const X_ROBOTS_TAG: &str = "x-robots-tag";

/// Crawler directive attached to every redirect-endpoint response.
///
/// Short link URLs are transient aliases; search engines must never index,
/// follow, or archive them in place of the destination.
pub const ROBOTS_DIRECTIVE: &str = "noindex, nofollow, noarchive";

/// Redirects a short link token to its destination URL.
///
/// # Endpoint
///
/// `GET /go/{token}/`
///
/// # Responses
///
/// - **302 Found** with `Location` when the token resolves
/// - **404 Not Found** for unknown, expired, or malformed tokens
/// - **503 Service Unavailable** when the mapping store cannot be read
///
/// Every outcome carries `X-Robots-Tag: noindex, nofollow, noarchive` —
/// including errors, so crawlers probing dead or transient tokens get the
/// directive too.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Response {
    let resolved = if is_well_formed(&token) {
        state.link_service.resolve(&token).await
    } else {
        debug!("Rejected malformed token '{}'", token);
        Err(AppError::not_found(
            "Short link not found",
            json!({ "token": token }),
        ))
    };

    let mut response = match resolved {
        Ok(target_url) => redirect_to(&target_url),
        Err(err) => err.into_response(),
    };

    response
        .headers_mut()
        .insert(X_ROBOTS_TAG, HeaderValue::from_static(ROBOTS_DIRECTIVE));

    response
}

/// Tokens are lowercase hex in practice, but the public contract only
/// requires alphanumeric. Anything else resolves to nothing.
fn is_well_formed(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Builds a `302 Found` response.
///
/// Axum's [`axum::response::Redirect`] offers 303/307/308 only; the contract
/// here is a plain 302, so the response is assembled by hand.
fn redirect_to(target_url: &str) -> Response {
    match HeaderValue::from_str(target_url) {
        Ok(location) => {
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        // Unreachable for URLs that passed validation on the way in.
        Err(_) => AppError::internal(
            "Stored destination is not a valid header value",
            json!({}),
        )
        .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_well_formedness() {
        assert!(is_well_formed("a9b9f04336"));
        assert!(is_well_formed("ABC123"));
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("a9b9-04336"));
        assert!(!is_well_formed("../etc/passwd"));
    }

    #[test]
    fn test_redirect_response_shape() {
        let response = redirect_to("https://example.com");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com"
        );
    }
}
