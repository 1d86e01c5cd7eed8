//! Contact form submission entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message left through the site's contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Listing the enquiry is about, if any.
    pub property_id: Option<String>,
    /// Set once an admin has opened the submission.
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
