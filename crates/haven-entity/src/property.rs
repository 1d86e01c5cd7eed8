//! Property listing entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sale status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    /// Open for enquiries.
    #[default]
    Available,
    /// Under offer.
    Pending,
    /// No longer on the market.
    Sold,
}

/// A real-estate listing shown on the marketing site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    /// URL-safe identifier, unique across listings.
    pub slug: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub status: PropertyStatus,
    pub units: i32,
    pub acres: f64,
    pub features: Vec<String>,
    pub image_url: String,
    pub image_alt: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
