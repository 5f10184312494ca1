//! Router-level tests.
//!
//! Requests go through the full router, so path and body extraction, error mapping
//! and the OpenAPI routes are exercised exactly as a client would see them.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::router, service::credential::CredentialHandler, state::AppState};


/// Router wired to an in-memory database.
///
/// Keeps the test context alive so the database outlives every request.
struct TestApp {
    router: Router,
    test: TestContext,
}

impl TestApp {
    /// Creates an app with every collection table.
    async fn new() -> Self {
        Self::with_builder(TestBuilder::new().with_all_tables()).await
    }

    /// Creates an app from a custom builder, e.g. one missing tables.
    async fn with_builder(builder: TestBuilder) -> Self {
        let test = builder.build().await.unwrap();
        let db = test.db.as_ref().unwrap().clone();
        let credentials = CredentialHandler::new(8, 1).unwrap();

        Self {
            router: router().with_state(AppState::new(db, credentials)),
            test,
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Sends a request and returns the status with the body parsed as JSON.
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        self.send_request(request).await
    }

    async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}

fn message(text: &str) -> Value {
    json!({ "message": text })
}
