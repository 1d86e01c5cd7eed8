//! Saved listing handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use haven_core::error::AppError;
use haven_core::traits::repository::Repository;
use haven_core::types::{PageResponse, SuccessResponse};
use haven_entity::property::Property;

use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/v1/favorites
///
/// Listings the caller saved, newest save first. Listings deleted since
/// they were saved are skipped.
pub async fn list_favorites(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<Property>>, AppError> {
    let page = params.into_page_request();
    let favorites = state.store.favorites.find_by_user(current.user_id()).await?;

    let mut properties = Vec::with_capacity(favorites.len());
    for favorite in favorites {
        if let Some(property) = state
            .store
            .properties
            .find_by_id(favorite.property_id.as_str())
            .await?
        {
            properties.push(property);
        }
    }

    Ok(Json(PageResponse::from_items(properties, &page)))
}

/// POST /api/v1/favorites/{property_id}
pub async fn add_favorite(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(property_id): Path<String>,
) -> Result<(StatusCode, Json<SuccessResponse<()>>), AppError> {
    if state
        .store
        .properties
        .find_by_id(property_id.as_str())
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Property not found"));
    }

    state
        .store
        .favorites
        .add(current.user_id(), &property_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::message("Property added to favorites")),
    ))
}

/// DELETE /api/v1/favorites/{property_id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(property_id): Path<String>,
) -> Result<Json<SuccessResponse<()>>, AppError> {
    if !state
        .store
        .favorites
        .remove(current.user_id(), &property_id)
        .await?
    {
        return Err(AppError::not_found("Favorite not found"));
    }
    Ok(Json(SuccessResponse::message("Property removed from favorites")))
}
