//! Auth handlers: login, signup, refresh.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{debug, info};

use haven_auth::AuthError;
use haven_core::error::{AppError, ErrorKind};
use haven_core::traits::repository::Repository;
use haven_entity::user::{User, UserRole};

use crate::dto::request::{LoginRequest, RefreshRequest, SignupRequest};
use crate::dto::response::{AuthResponse, RefreshResponse};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let Some(user) = state.store.users.find_by_email(&req.email).await? else {
        debug!("Login failed: unknown email");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    };

    let verified = state
        .password_hasher
        .verify_password_blocking(req.password, user.password_hash.clone())
        .await;
    if !verified {
        debug!(user_id = %user.id, "Login failed: wrong password");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }
    if !user.is_active {
        debug!(user_id = %user.id, "Login failed: account inactive");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let tokens = state.tokens.issue_pair(&user.id, &user.email, user.role)?;
    info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok(Json(AuthResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_in: tokens.expires_in,
        user,
    }))
}

/// POST /api/v1/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    state.password_validator.validate(&req.password)?;

    if state.store.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::conflict("User with this email already exists"));
    }

    let hash = state
        .password_hasher
        .hash_password_blocking(req.password)
        .await?;

    let user = User::new(
        req.email.trim(),
        hash,
        req.first_name,
        req.last_name,
        UserRole::User,
    );
    let user = state
        .store
        .users
        .create(user)
        .await
        .map_err(|e| match e.kind {
            ErrorKind::Conflict => AppError::conflict("User with this email already exists"),
            _ => e,
        })?;

    let tokens = state.tokens.issue_pair(&user.id, &user.email, user.role)?;
    info!(user_id = %user.id, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            user,
        }),
    ))
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    let (access_token, expires_in) =
        state
            .tokens
            .refresh(&req.refresh_token)
            .map_err(|err| match err {
                AuthError::InvalidToken(reason) => {
                    debug!(%reason, "Refresh token rejected");
                    AppError::unauthorized("Invalid refresh token")
                }
                other => other.into(),
            })?;

    Ok(Json(RefreshResponse {
        access_token,
        expires_in,
    }))
}
