//! Brochure download handler.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use haven_core::error::AppError;
use haven_core::traits::repository::Repository;
use haven_core::types::SuccessResponse;
use haven_entity::brochure::BrochureRequest;

use crate::dto::request;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/brochure/download
///
/// Records the request; delivery of the brochure itself happens elsewhere.
pub async fn download_brochure(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<request::BrochureRequest>,
) -> Result<Json<SuccessResponse<()>>, AppError> {
    if state
        .store
        .properties
        .find_by_id(req.property_id.as_str())
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Property not found"));
    }

    let record = BrochureRequest {
        id: Uuid::new_v4().to_string(),
        user_id: None,
        email: req.email,
        property_id: req.property_id,
        created_at: Utc::now(),
    };
    let record = state.store.brochures.create(record).await?;
    let downloads = state
        .store
        .brochures
        .count_for_property(&record.property_id)
        .await?;
    info!(property_id = %record.property_id, downloads, "Brochure requested");

    Ok(Json(SuccessResponse::message("Brochure download initiated")))
}
