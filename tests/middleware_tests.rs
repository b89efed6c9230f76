//! Middleware module unit tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use contentgen::middleware::logging::{request_logging_middleware, REQUEST_ID_HEADER};
use tower::ServiceExt;

fn app() -> Router {
    Router::new()
        .route("/ok", get(|| async { "ok" }))
        .route("/fail", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .layer(middleware::from_fn(request_logging_middleware))
}

async fn request_id(uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .header("user-agent", "middleware-test")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    (response.status(), id)
}

#[tokio::test]
async fn test_request_id_is_uuid() {
    let (status, id) = request_id("/ok").await;

    assert_eq!(status, StatusCode::OK);
    assert!(uuid::Uuid::parse_str(&id).is_ok(), "not a uuid: {}", id);
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let (_, first) = request_id("/ok").await;
    let (_, second) = request_id("/ok").await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_error_responses_pass_through() {
    let (status, id) = request_id("/fail").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!id.is_empty());
}
