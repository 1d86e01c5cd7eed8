//! Identity middleware for protected routes.
//!
//! Reads `Authorization: Bearer <token>`, verifies the token, and attaches a
//! [`RequestIdentity`] to the request extensions. Every rejection is a 401;
//! the precise reason is logged at debug level only.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use haven_auth::bearer::parse_bearer;
use haven_auth::{AuthError, RequestIdentity};
use haven_core::error::AppError;

use crate::state::AppState;

/// Resolves the caller's identity or rejects the request with 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| reject(&path, AuthError::MalformedHeader))?,
        ),
        None => None,
    };
    let token = parse_bearer(header).map_err(|e| reject(&path, e))?;
    let claims = state.tokens.verify(token).map_err(|e| reject(&path, e))?;

    request
        .extensions_mut()
        .insert(RequestIdentity::from(claims));

    Ok(next.run(request).await)
}

fn reject(path: &str, err: AuthError) -> AppError {
    debug!(path, reason = %err, "Authentication rejected");
    err.into()
}
