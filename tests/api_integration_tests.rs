//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for the routes that do not need a
//! live upstream: parameter validation, identifier rejection, health, and
//! stats.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mkstar::api::create_router;
use mkstar::github::GithubClient;
use mkstar::render::ImageRenderer;
use mkstar::AppState;
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    let github = GithubClient::new(None).expect("client should build");
    let renderer = ImageRenderer::new(100, None);
    create_router(AppState::new(github, renderer), "public")
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Generate Endpoint Tests ==

#[tokio::test]
async fn test_generate_without_url_returns_400_with_error_body() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/generate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"].as_str().unwrap(), "GitHub URL is required");
}

#[tokio::test]
async fn test_generate_with_empty_url_returns_400() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/generate?url=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_with_malformed_identifier_returns_400() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/generate?url=not-a-repo")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Invalid GitHub repository format"));
}

#[tokio::test]
async fn test_generate_rejects_non_get_methods() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate?url=foo/bar")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_starts_empty() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["hits"].as_u64().unwrap(), 0);
    assert_eq!(json["misses"].as_u64().unwrap(), 0);
    assert_eq!(json["cached_images"].as_u64().unwrap(), 0);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Routing Tests ==

#[tokio::test]
async fn test_static_routes_are_not_captured_as_repositories() {
    // /stats and /health are single segments, so they can never collide with
    // the two-segment /:owner/:repo capture; this pins that assumption
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_none());
}
