//! Blog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use haven_core::error::AppError;
use haven_core::traits::repository::Repository;
use haven_core::types::{PageResponse, SuccessResponse};
use haven_entity::blog::BlogPost;

use super::property::resolve_slug;
use crate::dto::request::BlogPostRequest;
use crate::extractors::{PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/blog
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<BlogPost>>, AppError> {
    let page = params.into_page_request();
    Ok(Json(state.store.blog.find_published(&page).await?))
}

/// GET /api/v1/blog/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    state
        .store
        .blog
        .find_by_id(id.as_str())
        .await?
        .filter(|p| p.published)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Blog post not found"))
}

/// GET /api/v1/blog/slug/{slug}
pub async fn get_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    state
        .store
        .blog
        .find_by_slug(&slug)
        .await?
        .filter(|p| p.published)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Blog post not found"))
}

/// GET /api/v1/blog/category/{category}
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<BlogPost>>, AppError> {
    if category.trim().is_empty() {
        return Err(AppError::validation("Category is required"));
    }
    let page = params.into_page_request();
    Ok(Json(
        state.store.blog.find_by_category(category.trim(), &page).await?,
    ))
}

/// POST /api/v1/admin/blog
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<BlogPostRequest>,
) -> Result<(StatusCode, Json<BlogPost>), AppError> {
    let now = Utc::now();
    let post = BlogPost {
        id: Uuid::new_v4().to_string(),
        slug: resolve_slug(req.slug.as_deref(), &req.title)?,
        title: req.title,
        excerpt: req.excerpt,
        content: req.content,
        category: req.category,
        tags: req.tags,
        image_url: req.image_url,
        image_alt: req.image_alt,
        author: req.author,
        published: req.published,
        created_at: now,
        updated_at: now,
    };

    let post = state.store.blog.create(post).await?;
    info!(post_id = %post.id, slug = %post.slug, "Blog post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/v1/admin/blog/{id}
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<BlogPostRequest>,
) -> Result<Json<BlogPost>, AppError> {
    let existing = state
        .store
        .blog
        .find_by_id(id.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Blog post not found"))?;

    let slug = match req.slug.as_deref() {
        Some(_) => resolve_slug(req.slug.as_deref(), &req.title)?,
        None => existing.slug,
    };

    let post = BlogPost {
        id: existing.id,
        title: req.title,
        slug,
        excerpt: req.excerpt,
        content: req.content,
        category: req.category,
        tags: req.tags,
        image_url: req.image_url,
        image_alt: req.image_alt,
        author: req.author,
        published: req.published,
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    let post = state.store.blog.update(post).await?;
    info!(post_id = %post.id, "Blog post updated");
    Ok(Json(post))
}

/// DELETE /api/v1/admin/blog/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<()>>, AppError> {
    if !state.store.blog.delete(id.as_str()).await? {
        return Err(AppError::not_found("Blog post not found"));
    }
    info!(post_id = %id, "Blog post deleted");
    Ok(Json(SuccessResponse::message("Blog post deleted successfully")))
}
