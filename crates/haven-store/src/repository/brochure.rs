//! Brochure request log.

use haven_core::result::AppResult;

use super::BrochureRepository;

impl BrochureRepository {
    /// Number of brochure requests recorded for a listing.
    pub async fn count_for_property(&self, property_id: &str) -> AppResult<u64> {
        Ok(self.count_where(|b| b.property_id == property_id))
    }
}
