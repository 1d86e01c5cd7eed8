//! Role gate and admin route tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::from_fn;
use axum::routing::get;
use serde_json::{Value, json};
use tower::ServiceExt;

use haven_api::middleware::rbac::require_admin;
use haven_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_user_role_is_forbidden() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("plain@example.com", UserRole::User).await;

    for path in [
        "/api/v1/admin/users",
        "/api/v1/admin/contacts",
        "/api/v1/admin/dashboard/stats",
    ] {
        let response = app.request("GET", path, None, Some(&token)).await;
        response.assert_error(StatusCode::FORBIDDEN, "Admin access required");
    }
}

#[tokio::test]
async fn test_admin_routes_require_identity_first() {
    let app = TestApp::new().await;
    let response = app
        .request("GET", "/api/v1/admin/dashboard/stats", None, None)
        .await;
    response.assert_error(StatusCode::UNAUTHORIZED, "Authorization header is missing");
}

#[tokio::test]
async fn test_admin_gate_alone_fails_closed() {
    let router: Router = Router::new()
        .route("/gated", get(|| async { "reached" }))
        .route_layer(from_fn(require_admin));

    let response = router
        .oneshot(Request::get("/gated").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({ "error": "Forbidden", "message": "Admin access required", "code": 403 })
    );
}

#[tokio::test]
async fn test_admin_dashboard() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/v1/admin/dashboard/stats", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_properties"], 2);
    assert_eq!(response.body["total_blog_posts"], 1);
    assert_eq!(response.body["registered_users"], 1);
    assert_eq!(response.body["unread_contacts"], 0);
    assert!(response.body["last_updated"].is_string());
}

#[tokio::test]
async fn test_admin_property_crud() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("ops@example.com", UserRole::Admin).await;

    let created = app
        .request(
            "POST",
            "/api/v1/admin/properties",
            Some(json!({
                "title": "Lakeside Cabin",
                "location": "North Shore",
                "price": 420000.0,
                "units": 1,
                "acres": 1.5,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.body["slug"], "lakeside-cabin");
    assert_eq!(created.body["status"], "available");
    let id = created.body["id"].as_str().unwrap().to_string();

    let by_slug = app
        .request("GET", "/api/v1/properties/slug/lakeside-cabin", None, None)
        .await;
    assert_eq!(by_slug.status, StatusCode::OK);
    assert_eq!(by_slug.body["id"], id.as_str());

    let duplicate = app
        .request(
            "POST",
            "/api/v1/admin/properties",
            Some(json!({ "title": "Lakeside Cabin" })),
            Some(&token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let updated = app
        .request(
            "PUT",
            &format!("/api/v1/admin/properties/{id}"),
            Some(json!({ "title": "Lakeside Cabin", "price": 399000.0, "status": "pending" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["status"], "pending");
    assert_eq!(updated.body["slug"], "lakeside-cabin");

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/v1/admin/properties/{id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["success"], true);

    let gone = app
        .request("GET", &format!("/api/v1/properties/{id}"), None, None)
        .await;
    gone.assert_error(StatusCode::NOT_FOUND, "Property not found");
}

#[tokio::test]
async fn test_contacts_marked_read_on_open() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("ops@example.com", UserRole::Admin).await;

    let submitted = app
        .request(
            "POST",
            "/api/v1/contact",
            Some(json!({
                "first_name": "Jo",
                "last_name": "Ray",
                "email": "jo@example.com",
                "phone": "555-0100",
                "message": "Please call me about the villa.",
            })),
            None,
        )
        .await;
    assert_eq!(submitted.status, StatusCode::CREATED);
    let id = submitted.body["data"]["id"].as_str().unwrap().to_string();

    let stats = app
        .request("GET", "/api/v1/admin/dashboard/stats", None, Some(&token))
        .await;
    assert_eq!(stats.body["unread_contacts"], 1);

    let opened = app
        .request("GET", &format!("/api/v1/admin/contacts/{id}"), None, Some(&token))
        .await;
    assert_eq!(opened.status, StatusCode::OK);
    assert_eq!(opened.body["is_read"], true);

    let stats = app
        .request("GET", "/api/v1/admin/dashboard/stats", None, Some(&token))
        .await;
    assert_eq!(stats.body["unread_contacts"], 0);
    assert_eq!(stats.body["total_contacts"], 1);

    let recent = app
        .request(
            "GET",
            "/api/v1/admin/dashboard/recent-contacts",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(recent.body["limit"], 5);
    assert_eq!(recent.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_admin_can_deactivate_user() {
    let app = TestApp::new().await;
    let (_, admin) = app.create_user("ops@example.com", UserRole::Admin).await;
    let (user, _) = app.create_user("member@example.com", UserRole::User).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/admin/users/{}", user.id),
            Some(json!({ "is_active": false, "role": "admin" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["is_active"], false);
    assert_eq!(response.body["role"], "admin");

    let missing = app
        .request("DELETE", "/api/v1/admin/users/nope", None, Some(&admin))
        .await;
    missing.assert_error(StatusCode::NOT_FOUND, "User not found");
}
