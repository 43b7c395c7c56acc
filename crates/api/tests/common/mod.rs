#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use marks_api::config::ServerConfig;
use marks_api::router::build_app_router;
use marks_api::state::AppState;
use marks_core::dataset::{MemorySource, StudentSource};
use marks_core::student::StudentRecord;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The dataset path is unused because
/// tests inject their own source.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        student_data_path: "data.json".into(),
    }
}

/// Build the full application router around the given dataset source.
pub fn build_test_app(students: Arc<dyn StudentSource>) -> Router {
    let state = AppState { students };
    build_app_router(state, &test_config())
}

/// The two-student dataset used throughout the API tests.
pub fn sample_students() -> Vec<StudentRecord> {
    serde_json::from_value(serde_json::json!([
        { "name": "Alice Johnson", "total": 433 },
        { "name": "Bob Smith", "total": 410 }
    ]))
    .expect("sample dataset should deserialize")
}

/// In-memory source over [`sample_students`]. Keep a clone of the `Arc` to
/// inspect its load count after the request.
pub fn sample_source() -> Arc<MemorySource> {
    Arc::new(MemorySource::new(sample_students()))
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, Some("application/json"), body.to_string()).await
}

/// Send a POST request with an arbitrary body and optional content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(body.into()).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
