//! Request DTOs with validation.
//!
//! Every field defaults when absent so a missing field reaches the
//! validator and is reported with its own message instead of a generic
//! parse failure.

use serde::{Deserialize, Serialize};
use validator::Validate;

use haven_entity::property::PropertyStatus;
use haven_entity::user::UserRole;

// ── Auth ──

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    /// Account email.
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

/// Signup request body. Password length is checked by the password policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SignupRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RefreshRequest {
    /// Previously issued refresh token.
    pub refresh_token: String,
}

/// Profile update. Only names are editable by the account owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
}

// ── Admin ──

/// Admin edit of an account. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AdminUpdateUserRequest {
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

/// Create or replace a property listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PropertyRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Derived from the title when absent.
    pub slug: Option<String>,
    pub description: String,
    pub location: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    pub status: PropertyStatus,
    #[validate(range(min = 0, message = "Units cannot be negative"))]
    pub units: i32,
    #[validate(range(min = 0.0, message = "Acres cannot be negative"))]
    pub acres: f64,
    pub features: Vec<String>,
    pub image_url: String,
    pub image_alt: String,
}

/// Create or replace a blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BlogPostRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Derived from the title when absent.
    pub slug: Option<String>,
    pub excerpt: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub image_alt: String,
    pub author: String,
    pub published: bool,
}

// ── Public submissions ──

/// Contact form submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactFormRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
    /// Listing the enquiry is about, if any.
    pub property_id: Option<String>,
}

/// Newsletter signup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewsletterRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    pub name: String,
}

/// Brochure download request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BrochureRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Property is required"))]
    pub property_id: String,
}

/// Review of a listing by the calling user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReviewRequest {
    #[validate(length(min = 1, message = "Property is required"))]
    pub property_id: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    pub comment: String,
}
