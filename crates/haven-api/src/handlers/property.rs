//! Property listing handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use haven_core::error::AppError;
use haven_core::traits::repository::Repository;
use haven_core::types::{PageResponse, SuccessResponse, slugify};
use haven_entity::property::Property;

use crate::dto::request::PropertyRequest;
use crate::extractors::{PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/properties
pub async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<Property>>, AppError> {
    let page = params.into_page_request();
    Ok(Json(state.store.properties.find_all(&page).await?))
}

/// GET /api/v1/properties/{id}
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, AppError> {
    state
        .store
        .properties
        .find_by_id(id.as_str())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Property not found"))
}

/// GET /api/v1/properties/slug/{slug}
pub async fn get_property_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Property>, AppError> {
    state
        .store
        .properties
        .find_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Property not found"))
}

/// POST /api/v1/admin/properties
pub async fn create_property(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PropertyRequest>,
) -> Result<(StatusCode, Json<Property>), AppError> {
    let now = Utc::now();
    let property = Property {
        id: Uuid::new_v4().to_string(),
        slug: resolve_slug(req.slug.as_deref(), &req.title)?,
        title: req.title,
        description: req.description,
        location: req.location,
        price: req.price,
        status: req.status,
        units: req.units,
        acres: req.acres,
        features: req.features,
        image_url: req.image_url,
        image_alt: req.image_alt,
        created_at: now,
        updated_at: now,
    };

    let property = state.store.properties.create(property).await?;
    info!(property_id = %property.id, slug = %property.slug, "Property created");
    Ok((StatusCode::CREATED, Json(property)))
}

/// PUT /api/v1/admin/properties/{id}
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<PropertyRequest>,
) -> Result<Json<Property>, AppError> {
    let existing = state
        .store
        .properties
        .find_by_id(id.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Property not found"))?;

    let slug = match req.slug.as_deref() {
        Some(_) => resolve_slug(req.slug.as_deref(), &req.title)?,
        None => existing.slug,
    };

    let property = Property {
        id: existing.id,
        title: req.title,
        slug,
        description: req.description,
        location: req.location,
        price: req.price,
        status: req.status,
        units: req.units,
        acres: req.acres,
        features: req.features,
        image_url: req.image_url,
        image_alt: req.image_alt,
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    let property = state.store.properties.update(property).await?;
    info!(property_id = %property.id, "Property updated");
    Ok(Json(property))
}

/// DELETE /api/v1/admin/properties/{id}
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<()>>, AppError> {
    if !state.store.properties.delete(id.as_str()).await? {
        return Err(AppError::not_found("Property not found"));
    }
    info!(property_id = %id, "Property deleted");
    Ok(Json(SuccessResponse::message("Property deleted successfully")))
}

/// Explicit slug if given, otherwise one derived from the title.
pub(crate) fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, AppError> {
    let slug = slugify(explicit.unwrap_or(title));
    if slug.is_empty() {
        return Err(AppError::validation("Slug cannot be empty"));
    }
    Ok(slug)
}
