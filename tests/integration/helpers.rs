//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;

use haven_api::AppState;
use haven_core::config::AppConfig;
use haven_core::traits::repository::Repository;
use haven_entity::user::{User, UserRole};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_EMAIL: &str = "admin@havencommunities.com";
pub const ADMIN_PASSWORD: &str = "admin-password";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct store access and token minting
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with seeded content and admin account
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = TEST_SECRET.to_string();
        config.auth.seed_admin_password = Some(ADMIN_PASSWORD.to_string());

        let state = haven_api::init_state(config)
            .await
            .expect("Failed to init state");
        let router = haven_api::build_app(state.clone());

        Self { router, state }
    }

    /// Insert an account directly, bypassing signup, and return it with an
    /// access token.
    pub async fn create_user(&self, email: &str, role: UserRole) -> (User, String) {
        let user = User::new(email, "not-a-real-digest", "Test", "User", role);
        let user = self
            .state
            .store
            .users
            .create(user)
            .await
            .expect("Failed to create test user");
        let token = self.token_for(&user.id, &user.email, role, Duration::hours(1));
        (user, token)
    }

    /// Mint a token with the app's secret.
    pub fn token_for(&self, user_id: &str, email: &str, role: UserRole, valid_for: Duration) -> String {
        self.state
            .tokens
            .issue(user_id, email, role, valid_for)
            .expect("Failed to issue token")
    }

    /// Log in as the seeded admin and return the access token
    pub async fn admin_token(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/login",
                Some(serde_json::json!({
                    "email": ADMIN_EMAIL,
                    "password": ADMIN_PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Admin login failed: {:?}",
            response.body
        );

        response.body["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Make an HTTP request with an optional bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_with_header(method, path, body, authorization.as_deref())
            .await
    }

    /// Make an HTTP request with a raw `Authorization` header value
    pub async fn request_with_header(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body, `Null` if not JSON
    pub body: Value,
}

impl TestResponse {
    /// Asserts the uniform error body for `status` with `message`.
    pub fn assert_error(&self, status: StatusCode, message: &str) {
        assert_eq!(self.status, status, "body: {:?}", self.body);
        assert_eq!(self.body["code"], status.as_u16());
        assert_eq!(
            self.body["error"],
            status.canonical_reason().unwrap_or_default()
        );
        assert_eq!(self.body["message"], message);
    }
}
