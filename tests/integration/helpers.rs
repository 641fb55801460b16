//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use listsort_api::{AppState, build_app};
use listsort_core::codec::SortCodec;
use listsort_core::config::AppConfig;
use listsort_core::memory::MemorySource;
use listsort_core::registry::{Listing, ModelRegistry, SortColumn};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// App with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// App with the given configuration and the `users` fixture listing
    pub fn with_config(config: AppConfig) -> Self {
        let codec = SortCodec::new(&config.sorting);
        Self::with_codec(config, codec)
    }

    /// App with the given configuration and sort codec
    pub fn with_codec(config: AppConfig, codec: SortCodec) -> Self {
        let state = AppState::with_codec(config.clone(), users_registry(), codec);
        Self {
            router: build_app(state),
            config,
        }
    }

    /// Issue a GET and decode the JSON body
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}

fn users_registry() -> ModelRegistry {
    let users = MemorySource::new(vec![
        json!({ "login": "carol", "first_name": "Carol", "last_name": "Smith", "country": "Peru" }),
        json!({ "login": "ann", "first_name": "Ann", "last_name": "Smith", "country": "Chile" }),
        json!({ "login": "bob", "first_name": "Bob", "last_name": "Jones", "country": "Spain" }),
    ]);

    let mut registry = ModelRegistry::new();
    registry
        .register(
            Listing::new("users", Arc::new(users))
                .column(SortColumn::new("Login", "login").as_default())
                .column(SortColumn::new("Name", "last_name, first_name"))
                .column(SortColumn::new("Country", "country")),
        )
        .expect("register users");
    registry
}

/// Logins of the returned page, in order
pub fn logins(body: &Value) -> Vec<String> {
    body["data"]["page"]["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|row| row["login"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// The sort link with the given label
pub fn link<'a>(body: &'a Value, label: &str) -> &'a Value {
    body["data"]["links"]
        .as_array()
        .and_then(|links| links.iter().find(|l| l["label"] == label))
        .expect("link present")
}
