mod common;

use axum::http::StatusCode;
use serde_json::json;

// ─── SAVE ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_save_links_success() {
    let server = common::make_server();

    let response = server
        .put("/api/items/42/links")
        .json(&json!({ "urls": ["http://example.com", "https://rust-lang.org"] }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["item_id"], 42);
    assert_eq!(body["count"], 2);
    assert_eq!(body["links"][0]["token"], "a9b9f04336");
    assert_eq!(body["links"][1]["token"], "4a9240cef3");
    assert_eq!(
        body["links"][0]["short_url"],
        format!("{}/go/a9b9f04336/", common::BASE_URL)
    );
}

#[tokio::test]
async fn test_save_links_drops_invalid_entries() {
    let server = common::make_server();

    let response = server
        .put("/api/items/42/links")
        .json(&json!({ "urls": ["  http://example.com  ", "", "not a url", "rust-lang.org"] }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["count"], 2);
    assert_eq!(body["links"][0]["target_url"], "http://example.com");
    assert_eq!(body["links"][1]["target_url"], "https://rust-lang.org");
}

#[tokio::test]
async fn test_save_replaces_previous_list() {
    let server = common::make_server();

    server
        .put("/api/items/42/links")
        .json(&json!({ "urls": ["http://example.com", "https://rust-lang.org"] }))
        .await
        .assert_status_ok();

    server
        .put("/api/items/42/links")
        .json(&json!({ "urls": ["https://example.com/x"] }))
        .await
        .assert_status_ok();

    let body = server
        .get("/api/items/42/links")
        .await
        .json::<serde_json::Value>();

    assert_eq!(body["count"], 1);
    assert_eq!(body["links"][0]["target_url"], "https://example.com/x");
}

#[tokio::test]
async fn test_save_empty_list_removes_destinations() {
    let server = common::make_server();

    server
        .put("/api/items/42/links")
        .json(&json!({ "urls": ["http://example.com"] }))
        .await
        .assert_status_ok();

    let response = server
        .put("/api/items/42/links")
        .json(&json!({ "urls": [] }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["count"], 0);

    let body = server
        .get("/api/items/42/links")
        .await
        .json::<serde_json::Value>();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_saved_link_resolves() {
    let server = common::make_server();

    let body = server
        .put("/api/items/7/links")
        .json(&json!({ "urls": ["https://example.com/x"] }))
        .await
        .json::<serde_json::Value>();

    let token = body["links"][0]["token"].as_str().unwrap().to_string();
    assert_eq!(token, "fce167385b");

    let redirect = server.get(&format!("/go/{token}/")).await;
    redirect.assert_status(StatusCode::FOUND);
    assert_eq!(
        redirect.headers().get("location").unwrap(),
        "https://example.com/x"
    );
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_empty_for_unknown_item() {
    let server = common::make_server();

    let response = server.get("/api/items/999/links").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["item_id"], 999);
    assert_eq!(body["count"], 0);
    assert!(body["links"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_lists_are_isolated_per_item() {
    let server = common::make_server();

    server
        .put("/api/items/1/links")
        .json(&json!({ "urls": ["http://example.com"] }))
        .await
        .assert_status_ok();
    server
        .put("/api/items/2/links")
        .json(&json!({ "urls": ["https://rust-lang.org"] }))
        .await
        .assert_status_ok();

    let first = server
        .get("/api/items/1/links")
        .await
        .json::<serde_json::Value>();
    let second = server
        .get("/api/items/2/links")
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["links"][0]["target_url"], "http://example.com");
    assert_eq!(second["links"][0]["target_url"], "https://rust-lang.org");
}
