//! Review handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use haven_core::error::AppError;
use haven_core::traits::repository::Repository;
use haven_entity::review::Review;

use crate::dto::request::ReviewRequest;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/reviews
pub async fn create_review(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedJson(req): ValidatedJson<ReviewRequest>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    if state
        .store
        .properties
        .find_by_id(req.property_id.as_str())
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Property not found"));
    }

    let now = Utc::now();
    let review = Review {
        id: Uuid::new_v4().to_string(),
        user_id: current.user_id().to_string(),
        property_id: req.property_id,
        rating: req.rating,
        comment: req.comment,
        created_at: now,
        updated_at: now,
    };

    let review = state.store.reviews.create(review).await?;
    info!(review_id = %review.id, property_id = %review.property_id, rating = review.rating, "Review created");
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/v1/reviews/user
pub async fn list_my_reviews(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<Review>>, AppError> {
    Ok(Json(
        state.store.reviews.find_by_user(current.user_id()).await?,
    ))
}
