//! Admin image upload handler.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use tracing::info;
use uuid::Uuid;

use haven_core::error::AppError;
use haven_core::types::SuccessResponse;

use crate::dto::response::UploadResponse;
use crate::state::AppState;

/// POST /api/v1/admin/upload
///
/// Accepts a multipart `file` field holding a JPEG, PNG, or WebP image and
/// returns the object name and public URL it is published under. The bytes
/// are handed to the external object store.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SuccessResponse<UploadResponse>>), AppError> {
    let storage = &state.config.storage;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !storage.allowed_content_types.contains(&content_type) {
            return Err(AppError::validation(
                "Only JPEG, PNG, and WebP images are allowed",
            ));
        }

        let original = sanitize_file_name(field.file_name().unwrap_or("upload"));
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
        if data.len() as u64 > storage.max_upload_size_bytes {
            return Err(AppError::validation("File is too large"));
        }

        let filename = format!("{}/{}-{}", storage.image_prefix, Uuid::new_v4(), original);
        let url = storage.public_url(&filename);
        info!(filename = %filename, size = data.len(), content_type = %content_type, "Image uploaded");

        return Ok((
            StatusCode::CREATED,
            Json(SuccessResponse::with_data(
                UploadResponse { url, filename },
                "Image uploaded successfully",
            )),
        ));
    }

    Err(AppError::validation("File is required"))
}

/// Keeps only the final path component and characters safe in a URL path.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
