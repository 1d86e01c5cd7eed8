//! Identity middleware behaviour on protected routes.

use axum::http::StatusCode;
use chrono::Duration;

use haven_auth::{TokenLifetimes, TokenService};
use haven_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_missing_header() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/v1/me", None, None).await;
    response.assert_error(StatusCode::UNAUTHORIZED, "Authorization header is missing");
}

#[tokio::test]
async fn test_malformed_headers() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("shape@example.com", UserRole::User).await;

    let shapes = [
        "Bearer".to_string(),
        format!("Basic {token}"),
        format!("bearer {token}"),
        format!("Bearer {token} extra"),
        token.clone(),
    ];
    for header in shapes {
        let response = app
            .request_with_header("GET", "/api/v1/me", None, Some(&header))
            .await;
        response.assert_error(
            StatusCode::UNAUTHORIZED,
            "Invalid authorization header format",
        );
    }
}

#[tokio::test]
async fn test_valid_token_attaches_identity() {
    let app = TestApp::new().await;
    let (user, token) = app.create_user("valid@example.com", UserRole::User).await;

    let response = app.request("GET", "/api/v1/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], user.id.as_str());
    assert_eq!(response.body["email"], "valid@example.com");
}

#[tokio::test]
async fn test_invalid_tokens_collapse_to_one_message() {
    let app = TestApp::new().await;
    let (user, _) = app.create_user("bad@example.com", UserRole::User).await;

    let foreign = TokenService::new(b"some-other-secret", TokenLifetimes::default())
        .issue(&user.id, &user.email, UserRole::User, Duration::hours(1))
        .unwrap();
    let now = chrono::Utc::now();
    let expired = app
        .state
        .tokens
        .issue_at(&user.id, &user.email, UserRole::User, Duration::hours(1), now - Duration::hours(2))
        .unwrap();
    let future = app
        .state
        .tokens
        .issue_at(&user.id, &user.email, UserRole::User, Duration::hours(1), now + Duration::hours(1))
        .unwrap();

    for token in [foreign, expired, future, "not.a.token".to_string()] {
        let response = app.request("GET", "/api/v1/me", None, Some(&token)).await;
        response.assert_error(StatusCode::UNAUTHORIZED, "Invalid or expired token");
    }
}

#[tokio::test]
async fn test_one_second_token_stops_working() {
    let app = TestApp::new().await;
    let (user, _) = app.create_user("brief@example.com", UserRole::User).await;
    let token = app.token_for(&user.id, &user.email, UserRole::User, Duration::seconds(1));

    let fresh = app.request("GET", "/api/v1/me", None, Some(&token)).await;
    assert_eq!(fresh.status, StatusCode::OK);

    tokio::time::sleep(std::time::Duration::from_millis(2100)).await;

    let stale = app.request("GET", "/api/v1/me", None, Some(&token)).await;
    stale.assert_error(StatusCode::UNAUTHORIZED, "Invalid or expired token");
}

#[tokio::test]
async fn test_public_routes_ignore_missing_header() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/v1/properties", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}
