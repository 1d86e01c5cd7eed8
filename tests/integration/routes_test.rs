//! Public and caller-scoped route tests.

use axum::http::StatusCode;
use serde_json::json;

use haven_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_uses_error_body() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/v1/nowhere", None, None).await;
    response.assert_error(StatusCode::NOT_FOUND, "Route not found");
}

#[tokio::test]
async fn test_property_pagination_normalizes_params() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/v1/properties?page=0&limit=500", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["limit"], 10);
    assert_eq!(response.body["total"], 2);
    assert_eq!(response.body["total_pages"], 1);

    let response = app
        .request("GET", "/api/v1/properties?page=2&limit=1", None, None)
        .await;
    assert_eq!(response.body["total_pages"], 2);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_blog_lookups() {
    let app = TestApp::new().await;

    let by_slug = app
        .request("GET", "/api/v1/blog/slug/top-real-estate-trends", None, None)
        .await;
    assert_eq!(by_slug.status, StatusCode::OK);
    assert_eq!(by_slug.body["author"], "John Doe");

    let by_category = app
        .request("GET", "/api/v1/blog/category/INVESTMENT", None, None)
        .await;
    assert_eq!(by_category.body["total"], 1);
}

#[tokio::test]
async fn test_contact_validation() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/v1/contact",
            Some(json!({
                "first_name": "Jo",
                "last_name": "Ray",
                "email": "jo@example.com",
                "phone": "555",
                "message": "short",
            })),
            None,
        )
        .await;
    response.assert_error(
        StatusCode::BAD_REQUEST,
        "Message must be at least 10 characters",
    );
}

#[tokio::test]
async fn test_newsletter_resubscribe_is_not_created_twice() {
    let app = TestApp::new().await;
    let body = json!({ "email": "reader@example.com", "name": "Reader" });

    let first = app
        .request("POST", "/api/v1/newsletter/subscribe", Some(body.clone()), None)
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/v1/newsletter/subscribe", Some(body), None)
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["data"]["id"], first.body["data"]["id"]);
}

#[tokio::test]
async fn test_favorites_and_reviews() {
    let app = TestApp::new().await;
    let (user, token) = app.create_user("fan@example.com", UserRole::User).await;

    let added = app
        .request("POST", "/api/v1/favorites/prop-002", None, Some(&token))
        .await;
    assert_eq!(added.status, StatusCode::CREATED);

    let again = app
        .request("POST", "/api/v1/favorites/prop-002", None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let missing = app
        .request("POST", "/api/v1/favorites/prop-404", None, Some(&token))
        .await;
    missing.assert_error(StatusCode::NOT_FOUND, "Property not found");

    let list = app
        .request("GET", "/api/v1/favorites", None, Some(&token))
        .await;
    assert_eq!(list.body["total"], 1);
    assert_eq!(list.body["data"][0]["slug"], "luxury-villa");

    let review = app
        .request(
            "POST",
            "/api/v1/reviews",
            Some(json!({ "property_id": "prop-002", "rating": 5, "comment": "Lovely" })),
            Some(&token),
        )
        .await;
    assert_eq!(review.status, StatusCode::CREATED);
    assert_eq!(review.body["user_id"], user.id.as_str());

    let bad_rating = app
        .request(
            "POST",
            "/api/v1/reviews",
            Some(json!({ "property_id": "prop-002", "rating": 9 })),
            Some(&token),
        )
        .await;
    bad_rating.assert_error(StatusCode::BAD_REQUEST, "Rating must be between 1 and 5");

    let mine = app
        .request("GET", "/api/v1/reviews/user", None, Some(&token))
        .await;
    assert_eq!(mine.body.as_array().unwrap().len(), 1);

    let removed = app
        .request("DELETE", "/api/v1/favorites/prop-002", None, Some(&token))
        .await;
    assert_eq!(removed.status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile_changes_names_only() {
    let app = TestApp::new().await;
    let (user, token) = app.create_user("names@example.com", UserRole::User).await;

    let response = app
        .request(
            "PUT",
            "/api/v1/me",
            Some(json!({ "first_name": "Renamed", "last_name": "Person", "role": "admin" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["first_name"], "Renamed");
    assert_eq!(response.body["role"], "user");
    assert_eq!(response.body["id"], user.id.as_str());
}
