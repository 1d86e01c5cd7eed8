//! Response envelopes shared by every API endpoint.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Standard API error response body.
///
/// Every failure, whatever its cause, is rendered with this exact shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorResponse {
    /// Canonical reason phrase of the status (`"Unauthorized"`, `"Forbidden"`, ...).
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Numeric HTTP status code.
    pub code: u16,
}

impl ApiErrorResponse {
    /// Builds the body for the given status and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: message.into(),
            code: status.as_u16(),
        }
    }
}

/// Standard success envelope for mutations and acknowledgements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T: Serialize> {
    /// Always `true`.
    pub success: bool,
    /// Optional payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> SuccessResponse<T> {
    /// Creates a response carrying data and a message.
    pub fn with_data(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl SuccessResponse<()> {
    /// Creates a data-less acknowledgement.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}
