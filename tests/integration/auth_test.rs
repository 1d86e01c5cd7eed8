//! Integration tests for the login, signup, and refresh flow.

use axum::http::StatusCode;
use serde_json::json;

use haven_entity::user::UserRole;

use crate::helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp};

#[tokio::test]
async fn test_admin_login_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["expires_in"], 86_400);
    assert_eq!(response.body["user"]["role"], "admin");
    assert!(response.body["user"].get("password_hash").is_none());

    let access = response.body["access_token"].as_str().unwrap();
    let claims = app.state.tokens.verify(access).unwrap();
    assert_eq!(claims.role, UserRole::Admin);
    assert_eq!(claims.exp - claims.iat, 86_400);

    let refresh = response.body["refresh_token"].as_str().unwrap();
    let claims = app.state.tokens.verify(refresh).unwrap();
    assert_eq!(claims.exp - claims.iat, 7 * 86_400);
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::new().await;

    let wrong_password = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": ADMIN_EMAIL, "password": "nope-nope" })),
            None,
        )
        .await;
    wrong_password.assert_error(StatusCode::UNAUTHORIZED, "Invalid email or password");

    let unknown = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "ghost@example.com", "password": "whatever" })),
            None,
        )
        .await;
    unknown.assert_error(StatusCode::UNAUTHORIZED, "Invalid email or password");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": ADMIN_EMAIL })),
            None,
        )
        .await;
    response.assert_error(StatusCode::BAD_REQUEST, "Email and password are required");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new().await;

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = app.send(req).await;
    response.assert_error(StatusCode::BAD_REQUEST, "Invalid request body");
}

#[tokio::test]
async fn test_signup_then_login_then_me() {
    let app = TestApp::new().await;

    let signup = app
        .request(
            "POST",
            "/api/v1/auth/signup",
            Some(json!({
                "email": "new@example.com",
                "password": "secret1",
                "first_name": "New",
                "last_name": "Person",
            })),
            None,
        )
        .await;
    assert_eq!(signup.status, StatusCode::CREATED, "{:?}", signup.body);
    assert_eq!(signup.body["user"]["role"], "user");
    assert!(signup.body["refresh_token"].as_str().is_some());

    let duplicate = app
        .request(
            "POST",
            "/api/v1/auth/signup",
            Some(json!({
                "email": "NEW@example.com",
                "password": "secret1",
                "first_name": "Other",
                "last_name": "Person",
            })),
            None,
        )
        .await;
    duplicate.assert_error(StatusCode::CONFLICT, "User with this email already exists");

    let login = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "new@example.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);

    let token = login.body["access_token"].as_str().unwrap();
    let me = app.request("GET", "/api/v1/me", None, Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], "new@example.com");
    assert_eq!(me.body["first_name"], "New");
}

#[tokio::test]
async fn test_signup_validation() {
    let app = TestApp::new().await;

    let short = app
        .request(
            "POST",
            "/api/v1/auth/signup",
            Some(json!({
                "email": "short@example.com",
                "password": "12345",
                "first_name": "A",
                "last_name": "B",
            })),
            None,
        )
        .await;
    short.assert_error(
        StatusCode::BAD_REQUEST,
        "Password must be at least 6 characters long",
    );

    let bad_email = app
        .request(
            "POST",
            "/api/v1/auth/signup",
            Some(json!({
                "email": "not-an-email",
                "password": "123456",
                "first_name": "A",
                "last_name": "B",
            })),
            None,
        )
        .await;
    bad_email.assert_error(StatusCode::BAD_REQUEST, "A valid email is required");
}

#[tokio::test]
async fn test_inactive_account_cannot_log_in() {
    let app = TestApp::new().await;
    let admin = app
        .state
        .store
        .users
        .find_by_email(ADMIN_EMAIL)
        .await
        .unwrap()
        .unwrap();
    app.state.store.users.modify(&admin.id, |u| u.is_active = false);

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
            None,
        )
        .await;
    response.assert_error(StatusCode::UNAUTHORIZED, "Invalid email or password");
}

#[tokio::test]
async fn test_refresh_mints_access_token() {
    let app = TestApp::new().await;
    let pair = app
        .state
        .tokens
        .issue_pair("user-77", "r@example.com", UserRole::User)
        .unwrap();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": pair.refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["expires_in"], 86_400);

    let claims = app
        .state
        .tokens
        .verify(response.body["access_token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.user_id, "user-77");
    assert_eq!(claims.email, "r@example.com");
    assert_eq!(claims.role, UserRole::User);
}

#[tokio::test]
async fn test_refresh_rejects_bad_token() {
    let app = TestApp::new().await;

    for token in ["", "garbage", "a.b.c"] {
        let response = app
            .request(
                "POST",
                "/api/v1/auth/refresh",
                Some(json!({ "refresh_token": token })),
                None,
            )
            .await;
        response.assert_error(StatusCode::UNAUTHORIZED, "Invalid refresh token");
    }
}
