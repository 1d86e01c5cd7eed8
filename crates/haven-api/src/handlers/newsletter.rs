//! Newsletter handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::info;

use haven_core::error::AppError;
use haven_core::traits::repository::Repository;
use haven_core::types::{PageResponse, SuccessResponse};
use haven_entity::newsletter::NewsletterSubscriber;

use crate::dto::request::NewsletterRequest;
use crate::extractors::{PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/newsletter/subscribe
///
/// Subscribing an address that unsubscribed earlier reactivates it.
pub async fn subscribe(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<NewsletterRequest>,
) -> Result<(StatusCode, Json<SuccessResponse<NewsletterSubscriber>>), AppError> {
    let (subscriber, created) = state
        .store
        .newsletter
        .subscribe(&req.email, req.name.trim())
        .await?;
    info!(subscriber_id = %subscriber.id, created, "Newsletter subscription");

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(SuccessResponse::with_data(
            subscriber,
            "Successfully subscribed to newsletter",
        )),
    ))
}

/// GET /api/v1/admin/newsletter/subscribers
pub async fn list_subscribers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<NewsletterSubscriber>>, AppError> {
    let page = params.into_page_request();
    Ok(Json(state.store.newsletter.find_all(&page).await?))
}

/// DELETE /api/v1/admin/newsletter/subscribers/{email}
pub async fn unsubscribe(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<SuccessResponse<()>>, AppError> {
    if state.store.newsletter.unsubscribe(&email).await?.is_none() {
        return Err(AppError::not_found("Subscriber not found"));
    }
    info!(email = %email, "Newsletter unsubscribe");
    Ok(Json(SuccessResponse::message(format!(
        "Email {email} has been unsubscribed"
    ))))
}
