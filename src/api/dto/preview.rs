//! DTOs for the short link preview endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for previewing a short link.
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// Candidate destination URL, possibly still missing a scheme.
    pub url: String,
}

/// Derived short link for a candidate URL, nothing persisted.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub target_url: String,
    pub token: String,
    pub short_url: String,
}
