//! Listing endpoint tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::StatusCode;

use listsort_core::codec::{Base64Codec, SortCodec, TokenCodec};
use listsort_core::config::AppConfig;
use listsort_core::config::sorting::InvalidTokenPolicy;

use crate::helpers::{TestApp, link, logins};

#[tokio::test]
async fn test_unsorted_listing_uses_default_column() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/lists/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"]["sort"].is_null());
    assert_eq!(logins(&body), vec!["ann", "bob", "carol"]);
    assert_eq!(body["data"]["page"]["total_items"], 3);

    let login = link(&body, "Login");
    assert_eq!(login["sort"], "login DESC");
    assert_eq!(login["current"], false);
    assert!(login.get("class").is_none());
    assert_eq!(login["href"], "/api/lists/users?sort=login+DESC");

    let name = link(&body, "Name");
    assert_eq!(name["href"], "/api/lists/users?sort=last_name%2C+first_name");
}

#[tokio::test]
async fn test_sorted_listing_marks_current_link() {
    let app = TestApp::new();
    let (status, body) = app
        .get("/api/lists/users?sort=login+DESC&q=smith")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sort"], "login DESC");
    assert_eq!(logins(&body), vec!["carol", "bob", "ann"]);

    let login = link(&body, "Login");
    assert_eq!(login["current"], true);
    assert_eq!(login["class"], "current-sort desc");
    assert_eq!(login["direction"], "desc");
    assert_eq!(login["href"], "/api/lists/users?sort=login&q=smith");

    let country = link(&body, "Country");
    assert_eq!(country["current"], false);
    assert_eq!(country["sort"], "country");
}

#[tokio::test]
async fn test_multi_field_sort() {
    let app = TestApp::new();
    let (_, body) = app
        .get("/api/lists/users?sort=last_name%2C+first_name")
        .await;

    assert_eq!(logins(&body), vec!["bob", "ann", "carol"]);
    let name = link(&body, "Name");
    assert_eq!(name["current"], true);
    assert_eq!(name["sort"], "last_name DESC, first_name DESC");
    assert_eq!(name["class"], "current-sort asc");
    assert_eq!(link(&body, "Login")["sort"], "login");
}

#[tokio::test]
async fn test_paging_parameters() {
    let app = TestApp::new();
    let (status, body) = app
        .get("/api/lists/users?sort=login&page=2&per_page=2")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(logins(&body), vec!["carol"]);
    assert_eq!(body["data"]["page"]["page"], 2);
    assert_eq!(body["data"]["page"]["total_pages"], 2);
}

#[tokio::test]
async fn test_page_far_past_the_end_is_empty() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/lists/users?page=1000000000000000000").await;

    assert_eq!(status, StatusCode::OK);
    assert!(logins(&body).is_empty());
    assert_eq!(body["data"]["page"]["page"], 1_000_000_000_000_000_000u64);
    assert_eq!(body["data"]["page"]["total_items"], 3);
    assert_eq!(body["data"]["page"]["has_next"], false);
}

#[tokio::test]
async fn test_per_page_follows_configured_maximum() {
    let mut config = AppConfig::default();
    config.pagination.max_per_page = 500;
    let app = TestApp::with_config(config);

    let (status, body) = app.get("/api/lists/users?per_page=300").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page"]["page_size"], 300);
    assert_eq!(logins(&body).len(), 3);

    let (_, body) = app.get("/api/lists/users?per_page=900").await;
    assert_eq!(body["data"]["page"]["page_size"], 500);
}

/// Base64 codec that counts decode calls.
#[derive(Debug, Default)]
struct CountingCodec {
    decodes: AtomicUsize,
}

impl TokenCodec for CountingCodec {
    fn encode(&self, spec: &str) -> String {
        Base64Codec.encode(spec)
    }

    fn decode(&self, token: &str) -> listsort_core::result::AppResult<String> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        Base64Codec.decode(token)
    }
}

#[tokio::test]
async fn test_sort_token_decoded_once_per_request() {
    let mut config = AppConfig::default();
    config.sorting.encode_tokens = true;
    let counting = Arc::new(CountingCodec::default());
    let codec = SortCodec::with_codec(&config.sorting, counting.clone());
    let token = codec.encode("login DESC");
    let app = TestApp::with_codec(config, codec);

    let (status, body) = app.get(&format!("/api/lists/users?sort={token}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sort"], "login DESC");
    assert_eq!(logins(&body), vec!["carol", "bob", "ann"]);
    assert_eq!(counting.decodes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unknown_listing_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/lists/ghosts").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_page_is_bad_request() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/lists/users?page=two").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_encoded_sort_tokens() {
    let mut config = AppConfig::default();
    config.sorting.encode_tokens = true;
    let codec = SortCodec::new(&config.sorting);
    let app = TestApp::with_config(config);

    let uri = format!("/api/lists/users?sort={}", codec.encode("country DESC"));
    let (status, body) = app.get(&uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sort"], "country DESC");
    assert_eq!(logins(&body), vec!["bob", "carol", "ann"]);

    let country = link(&body, "Country");
    assert_eq!(country["sort"], "country");
    let href = country["href"].as_str().expect("href");
    let token = href.trim_start_matches("/api/lists/users?sort=");
    assert_eq!(codec.decode(token).expect("decode"), "country");
}

#[tokio::test]
async fn test_undecodable_token_handling() {
    let mut config = AppConfig::default();
    config.sorting.encode_tokens = true;

    let lenient = TestApp::with_config(config.clone());
    let (status, body) = lenient.get("/api/lists/users?sort=%25%25%25").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["sort"].is_null());
    assert_eq!(link(&body, "Login")["current"], false);

    config.sorting.invalid_token = InvalidTokenPolicy::Reject;
    let strict = TestApp::with_config(config);
    let (status, _) = strict.get("/api/lists/users?sort=%25%25%25").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_lists_registered_listings() {
    let app = TestApp::new();
    assert_eq!(app.config.sorting.parameter_name, "sort");

    let (status, body) = app.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["listings"], serde_json::json!(["users"]));
}
