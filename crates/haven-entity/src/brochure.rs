//! Brochure download request entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged request for a listing's brochure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrochureRequest {
    pub id: String,
    /// Requesting account, when the caller was signed in.
    pub user_id: Option<String>,
    pub email: String,
    pub property_id: String,
    pub created_at: DateTime<Utc>,
}
