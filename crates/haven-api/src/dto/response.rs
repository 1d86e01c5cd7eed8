//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use haven_entity::blog::BlogPost;
use haven_entity::contact::ContactSubmission;
use haven_entity::property::Property;
use haven_entity::user::User;

/// Login and signup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// The authenticated account.
    pub user: User,
}

/// Token refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// New access token.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Admin dashboard summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_properties: u64,
    pub total_blog_posts: u64,
    pub total_contacts: u64,
    pub unread_contacts: u64,
    pub newsletter_subscribers: u64,
    pub registered_users: u64,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub recent_properties: Vec<Property>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub recent_blog_posts: Vec<BlogPost>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub recent_contacts: Vec<ContactSubmission>,
    pub last_updated: DateTime<Utc>,
}

/// Result of an image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Public URL the image will be served from.
    pub url: String,
    /// Generated object name.
    pub filename: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process can answer.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
}
