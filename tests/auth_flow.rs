mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::{app, send, send_raw};

#[tokio::test]
async fn registering_same_email_twice_conflicts() {
    let app = app();
    let body = json!({ "email": "test@example.com", "password": "password123", "name": "Test User" });

    let (status, first) = send(&app, "POST", "/api/auth/register", Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["message"], "User registered successfully");
    assert_eq!(first["user"]["id"], 1);
    assert_eq!(first["user"]["email"], "test@example.com");
    assert_eq!(first["user"]["role"], "customer");
    assert!(first["user"].get("password").is_none());
    assert!(first["user"].get("createdAt").is_none());

    let (status, second) = send(&app, "POST", "/api/auth/register", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(second["error"], "User already exists");
}

#[tokio::test]
async fn register_with_missing_fields_is_bad_request() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/auth/register",
        Some(json!({ "email": "test@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, _) = send_raw(
        &app(),
        "POST",
        "/api/auth/register",
        Some("{not json".to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_with_unknown_email_is_unauthorized() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "ghost@example.com", "password": "whatever" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn login_accepts_any_password_for_registered_email() {
    let app = app();
    send(
        &app,
        "POST",
        "/api/auth/register",
        Some(json!({ "email": "ada@example.com", "password": "correct", "name": "Ada" })),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "ada@example.com", "password": "definitely-wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["token"], "mock-jwt-token-1");
    assert_eq!(body["user"]["name"], "Ada");
}

#[tokio::test]
async fn login_without_password_is_bad_request() {
    let (status, _) = send(
        &app(),
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
