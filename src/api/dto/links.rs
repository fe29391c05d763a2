//! DTOs for the per-item destination list endpoints.

use serde::{Deserialize, Serialize};

use crate::application::services::ShortLink;

/// Request replacing an item's destination list wholesale.
///
/// Entries are cleaned server-side (trimmed, scheme-coerced, invalid ones
/// dropped); an empty list removes the item's destinations.
#[derive(Debug, Deserialize)]
pub struct SaveLinksRequest {
    pub urls: Vec<String>,
}

/// An item's destination list with its derived short links.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub item_id: i64,
    pub count: usize,
    pub links: Vec<LinkItem>,
}

/// A single destination with its short link.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub target_url: String,
    pub token: String,
    pub short_url: String,
}

impl From<ShortLink> for LinkItem {
    fn from(link: ShortLink) -> Self {
        Self {
            target_url: link.target_url,
            token: link.token,
            short_url: link.short_url,
        }
    }
}

impl LinksResponse {
    pub fn new(item_id: i64, links: Vec<ShortLink>) -> Self {
        let links: Vec<LinkItem> = links.into_iter().map(LinkItem::from).collect();
        Self {
            item_id,
            count: links.len(),
            links,
        }
    }
}
