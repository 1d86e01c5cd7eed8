//! Favorited listing entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listing saved to a user's wishlist. At most one per (user, property).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    pub property_id: String,
    pub created_at: DateTime<Utc>,
}
