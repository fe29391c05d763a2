//! Mapping entity representing a token → destination URL association.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A durable association between a short token and its destination URL.
///
/// Tokens are deterministic (see [`crate::domain::token_deriver`]), so the
/// same destination always maps to the same entry: re-saving refreshes the
/// entry instead of creating a duplicate. Distinct URLs that collide on the
/// truncated hash overwrite each other, last writer wins.
///
/// `expires_at` is only populated by the expiring-cache store policy; the
/// permanent policies leave it `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mapping {
    pub token: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Mapping {
    /// Creates a permanent mapping stamped with the current time.
    pub fn new(token: String, target_url: String) -> Self {
        Self {
            token,
            target_url,
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    /// Returns true if the mapping has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_mapping_creation() {
        let mapping = Mapping::new(
            "a9b9f04336".to_string(),
            "http://example.com".to_string(),
        );

        assert_eq!(mapping.token, "a9b9f04336");
        assert_eq!(mapping.target_url, "http://example.com");
        assert!(mapping.expires_at.is_none());
        assert!(!mapping.is_expired());
    }

    #[test]
    fn test_mapping_is_expired() {
        let mut mapping = Mapping::new("0123456789".to_string(), "https://example.com".to_string());
        mapping.expires_at = Some(Utc::now() - Duration::seconds(1));
        assert!(mapping.is_expired());
    }

    #[test]
    fn test_mapping_with_future_expiry_is_live() {
        let mut mapping = Mapping::new("0123456789".to_string(), "https://example.com".to_string());
        mapping.expires_at = Some(Utc::now() + Duration::days(30));
        assert!(!mapping.is_expired());
    }
}
