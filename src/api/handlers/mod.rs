//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod preview;
pub mod redirect;

pub use health::health_handler;
pub use links::{list_links_handler, save_links_handler};
pub use preview::preview_handler;
pub use redirect::redirect_handler;
