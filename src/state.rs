use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::MappingStore;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Kept alongside the service for direct health probes.
    pub store: Arc<dyn MappingStore>,
}

impl AppState {
    /// Creates the shared state.
    pub fn new(link_service: Arc<LinkService>, store: Arc<dyn MappingStore>) -> Self {
        Self {
            link_service,
            store,
        }
    }
}
