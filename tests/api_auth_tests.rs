// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API authentication tests.
//!
//! These tests verify that:
//! 1. Protected routes reject requests without valid tokens
//! 2. Protected routes accept requests with valid tokens
//! 3. The watch route degrades to guest instead of rejecting

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use clipstream::models::{EpisodeStatus, Role};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_health_is_public() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/subscription")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"plan":"weekly"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/subscription")
                .header(header::AUTHORIZATION, "Bearer not.a.jwt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"plan":"weekly"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_valid_token() {
    let (app, state) = common::create_test_app();
    let token = common::session_token(&state, "u1", Role::Viewer);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/subscription")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"plan":"weekly"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_session_cookie_is_accepted() {
    let (app, state) = common::create_test_app();
    let token = common::session_token(&state, "u1", Role::Viewer);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/subscription")
                .header(header::COOKIE, format!("clipstream_token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_watch_route_accepts_guests() {
    let (app, state) = common::create_test_app();
    common::seed_episode(&state, "e1", 1, EpisodeStatus::Published);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/episodes/e1/watch")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_watch_route_ignores_invalid_token() {
    // A broken token on the watch route means guest, not 401
    let (app, state) = common::create_test_app();
    common::seed_episode(&state, "e1", 1, EpisodeStatus::Published);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/episodes/e1/watch")
                .header(header::AUTHORIZATION, "Bearer not.a.jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_route_rejects_viewer_role() {
    let (app, state) = common::create_test_app();
    let token = common::session_token(&state, "u1", Role::Viewer);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/revenue")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_route_accepts_admin_role() {
    let (app, state) = common::create_test_app();
    let token = common::session_token(&state, "a1", Role::Admin);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/revenue")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
