//! Review lookups.

use haven_core::result::AppResult;
use haven_entity::review::Review;

use super::ReviewRepository;

impl ReviewRepository {
    /// Reviews written by a user, newest first.
    pub async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Review>> {
        Ok(self.select(|r| r.user_id == user_id))
    }
}
