//! Contact form handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use haven_core::error::AppError;
use haven_core::traits::repository::Repository;
use haven_core::types::{PageResponse, SuccessResponse};
use haven_entity::contact::ContactSubmission;

use crate::dto::request::ContactFormRequest;
use crate::extractors::{PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ContactFormRequest>,
) -> Result<(StatusCode, Json<SuccessResponse<ContactSubmission>>), AppError> {
    let submission = ContactSubmission {
        id: Uuid::new_v4().to_string(),
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone: req.phone,
        message: req.message,
        property_id: req.property_id.filter(|id| !id.is_empty()),
        is_read: false,
        created_at: Utc::now(),
    };

    let submission = state.store.contacts.create(submission).await?;
    info!(contact_id = %submission.id, "Contact form submitted");

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::with_data(
            submission,
            "Contact form submitted successfully",
        )),
    ))
}

/// GET /api/v1/admin/contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<ContactSubmission>>, AppError> {
    let page = params.into_page_request();
    Ok(Json(state.store.contacts.find_all(&page).await?))
}

/// GET /api/v1/admin/contacts/{id}
///
/// Opening a submission marks it as read.
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContactSubmission>, AppError> {
    state
        .store
        .contacts
        .mark_read(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Contact submission not found"))
}
