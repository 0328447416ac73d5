//! Integration tests for authentication and RBAC rejection paths.
//!
//! Every assertion here resolves before any database round-trip, so the
//! suite runs against the lazy (never-connected) test pool.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{admin_token, body_json, get, get_authed, owner_token, post_json, staff_token};
use serde_json::json;
use tinta_core::roles::ROLE_OWNER;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Unauthenticated requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_authorization_header_returns_401() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/artists").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn non_bearer_authorization_returns_401() {
    let app = common::build_test_app();
    let request = Request::builder()
        .uri("/api/v1/artists")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_token_returns_401() {
    let app = common::build_test_app();
    let response = get_authed(app, "/api/v1/artists", "not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

// ---------------------------------------------------------------------------
// Role enforcement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn staff_token_cannot_reach_admin_routes() {
    let app = common::build_test_app();
    let response = get_authed(app, "/api/v1/admin/studios", &staff_token()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn admin_token_cannot_reach_studio_routes() {
    // Platform admins manage tenants; day-to-day records belong to
    // studio-scoped users.
    let app = common::build_test_app();
    let response = get_authed(app, "/api/v1/works", &admin_token()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn owner_token_without_studio_claim_is_rejected() {
    let app = common::build_test_app();
    let token = common::token_for(5, None, ROLE_OWNER);
    let response = get_authed(app, "/api/v1/works", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Token carries no studio claim");
}

// ---------------------------------------------------------------------------
// Auth happens before validation, validation before the database
// ---------------------------------------------------------------------------

#[tokio::test]
async fn authenticated_request_reaches_payload_validation() {
    // A 400 (not 401/403, not a pool error) proves the owner token
    // cleared auth and RBAC and the handler ran its boundary checks.
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/artists",
        &owner_token(),
        json!({ "name": "Vale", "commission_percentage": 150.0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
