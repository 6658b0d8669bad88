// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;
use wiki_core::application::services::ApplicationServices;
use wiki_core::domain::article::{Article, ArticleReadRepository};
use wiki_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::InMemoryArticleRepo;

pub fn make_router_with_repo(
    repo: Arc<dyn ArticleReadRepository>,
    include_drafts: bool,
) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(repo, include_drafts));
    let origins = vec!["http://localhost:3000".to_string()];
    build_router(HttpState { services }, &origins)
}

pub fn make_test_router(articles: Vec<Article>) -> axum::Router {
    make_router_with_repo(Arc::new(InMemoryArticleRepo::new(articles)), false)
}

/// Sends a GET and returns the status plus the parsed JSON body.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = serde_json::from_slice(&bytes).expect("valid json body");
    (status, json)
}

/// Slugs of a JSON array of article summaries, in response order.
pub fn slugs(json: &Value) -> Vec<String> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["slug"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    app: axum::Router,
    uri: &str,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = get_json(app, uri).await;
    assert_eq!(status, expected_status, "unexpected status for {uri}: {json}");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
