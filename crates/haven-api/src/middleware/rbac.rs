//! Role gate middleware for admin routes.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use haven_auth::{RequestIdentity, RoleGate};
use haven_core::error::AppError;

/// Admits only callers whose attached identity holds the admin role.
///
/// Must run after [`require_auth`](super::auth::require_auth). A request
/// that reaches it without an identity is rejected with 403.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let identity = request.extensions().get::<RequestIdentity>();

    if let Err(err) = RoleGate::admin().check(identity) {
        debug!(path = %request.uri().path(), reason = %err, "Authorization rejected");
        return Err(err.into());
    }

    Ok(next.run(request).await)
}
