//! Blog post entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog article. Categories used by the site are `Land`, `Homes`,
/// `Construction`, and `Investment`, but any string is stored as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub image_alt: String,
    pub author: String,
    /// Only published posts are visible on public routes.
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Case-insensitive category comparison.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}
