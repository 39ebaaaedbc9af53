//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fake::{
    faker::lorem::en::{Sentence, Word},
    Fake,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog_server::config::PaginationSettings;
use catalog_server::infrastructure::memory::InMemoryStore;
use catalog_server::presentation::http::routes;
use catalog_server::startup::AppState;

/// Test application over a freshly seeded in-memory store
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
}

/// Decoded response: status, `Location` header and JSON body (Null when empty)
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with seeded data
    pub fn new() -> Self {
        Self::with_pagination(PaginationSettings::default())
    }

    pub fn with_pagination(pagination: PaginationSettings) -> Self {
        let store = Arc::new(InMemoryStore::seeded());
        let state = AppState::with_memory_store(store.clone(), pagination);

        Self {
            router: routes::create_router(state),
            store,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send("GET", uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send("POST", uri, Some(body.to_string())).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send("PUT", uri, Some(body.to_string())).await
    }

    /// Send a raw, possibly malformed, JSON body
    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.send("POST", uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send("DELETE", uri, None).await
    }

    async fn send(&self, method: &str, uri: &str, body: Option<String>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body.map(Body::from).unwrap_or_default()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let location = response
            .headers()
            .get("location")
            .map(|v| v.to_str().unwrap().to_string());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            location,
            body,
        }
    }
}

/// Random single-word category name
pub fn fake_category_name() -> String {
    Word().fake()
}

/// Product JSON body linked to the given category ids
pub fn fake_product_body(category_ids: &[i64]) -> Value {
    let name: String = Word().fake();
    let description: String = Sentence(3..8).fake();
    let cents: u32 = (100u32..500_000).fake();

    json!({
        "name": format!("{} {}", name, (1u32..1000).fake::<u32>()),
        "description": description,
        "price": f64::from(cents) / 100.0,
        "imgUrl": "https://img.example.com/test.jpg",
        "date": "2020-07-13T20:50:07.123450Z",
        "categories": category_ids.iter().map(|id| json!({ "id": id })).collect::<Vec<_>>(),
    })
}

/// Ids in a JSON array of `{id, ...}` objects
pub fn ids(items: &Value) -> Vec<i64> {
    items
        .as_array()
        .map(|a| a.iter().filter_map(|i| i["id"].as_i64()).collect())
        .unwrap_or_default()
}
