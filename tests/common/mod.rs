#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use golinks::application::services::LinkService;
use golinks::domain::token_deriver::Md5TokenDeriver;
use golinks::infrastructure::editor::InMemoryLinkEditor;
use golinks::infrastructure::store::MemoryStore;
use golinks::routes::app_router;
use golinks::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:3000";

/// One hour; long enough that nothing expires mid-test.
pub const TEST_TTL_SECONDS: u64 = 3600;

/// Builds application state over the in-process backends.
pub fn create_test_state() -> AppState {
    let store = Arc::new(MemoryStore::new(TEST_TTL_SECONDS));
    let link_service = Arc::new(LinkService::new(
        store.clone(),
        Arc::new(InMemoryLinkEditor::new()),
        Arc::new(Md5TokenDeriver),
        BASE_URL.to_string(),
    ));
    AppState::new(link_service, store)
}

/// Builds a test server over the full application router, path
/// normalization included.
pub fn make_server() -> TestServer {
    let app = app_router(create_test_state());
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}
