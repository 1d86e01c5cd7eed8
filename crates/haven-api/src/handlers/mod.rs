//! Route handlers organized by domain.

pub mod auth;
pub mod blog;
pub mod brochure;
pub mod contact;
pub mod dashboard;
pub mod favorite;
pub mod health;
pub mod newsletter;
pub mod property;
pub mod review;
pub mod upload;
pub mod user;

use haven_core::error::AppError;

/// Fallback for unmatched routes, rendered with the uniform error body.
pub async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}
