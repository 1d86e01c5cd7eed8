//! Profile and account administration handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use tracing::info;

use haven_core::error::AppError;
use haven_core::traits::repository::Repository;
use haven_core::types::{PageResponse, SuccessResponse};
use haven_entity::user::User;

use crate::dto::request::{AdminUpdateUserRequest, UpdateProfileRequest};
use crate::extractors::{CurrentUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/me
pub async fn get_profile(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<User>, AppError> {
    state
        .store
        .users
        .find_by_id(current.user_id())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("User not found"))
}

/// PUT /api/v1/me
pub async fn update_profile(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<User>, AppError> {
    let user = state
        .store
        .users
        .update_names(current.user_id(), req.first_name.trim(), req.last_name.trim())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    info!(user_id = %user.id, "Profile updated");
    Ok(Json(user))
}

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<User>>, AppError> {
    let page = params.into_page_request();
    Ok(Json(state.store.users.find_all(&page).await?))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    state
        .store
        .users
        .find_by_id(id.as_str())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("User not found"))
}

/// PUT /api/v1/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<AdminUpdateUserRequest>,
) -> Result<Json<User>, AppError> {
    let mut user = state
        .store
        .users
        .find_by_id(id.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if let Some(first_name) = req.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = req.last_name {
        user.last_name = last_name;
    }
    if let Some(role) = req.role {
        user.role = role;
    }
    if let Some(is_active) = req.is_active {
        user.is_active = is_active;
    }
    user.updated_at = Utc::now();

    let user = state.store.users.update(user).await?;
    info!(user_id = %user.id, role = %user.role, active = user.is_active, "User updated by admin");
    Ok(Json(user))
}

/// DELETE /api/v1/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<()>>, AppError> {
    if !state.store.users.delete(id.as_str()).await? {
        return Err(AppError::not_found("User not found"));
    }
    info!(user_id = %id, "User deleted");
    Ok(Json(SuccessResponse::message("User deleted successfully")))
}
