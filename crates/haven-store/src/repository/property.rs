//! Property lookups.

use haven_core::result::AppResult;
use haven_entity::property::Property;

use super::PropertyRepository;

impl PropertyRepository {
    /// Find a listing by its URL slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Property>> {
        Ok(self.get_by_key(slug))
    }

    /// The `limit` most recently created listings.
    pub async fn recent(&self, limit: usize) -> AppResult<Vec<Property>> {
        Ok(self.all().into_iter().take(limit).collect())
    }
}
