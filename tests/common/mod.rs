//! Common test utilities and helpers
//!
//! - Test app construction
//! - Request helpers that return status and decoded JSON
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use bpmn_collab::backend::server::create_app;
use bpmn_collab::shared::AppConfig;
use serde_json::Value;
use tower::ServiceExt;

pub const MINIMAL_DIAGRAM: &str = "<bpmn:definitions></bpmn:definitions>";

/// App with the default configuration
pub fn test_app() -> Router {
    create_app(&AppConfig::default())
}

/// App with a custom configuration
pub fn test_app_with(config: AppConfig) -> Router {
    create_app(&config)
}

/// Send a request and return the status with the JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::post(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST /save-diagram with the given content
pub async fn save_diagram(app: &Router, diagram: &str) -> (StatusCode, Value) {
    post_json(
        app,
        "/save-diagram",
        &serde_json::json!({ "new_diagram": diagram }),
    )
    .await
}
