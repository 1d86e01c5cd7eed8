//! Saved listings.

use chrono::Utc;
use uuid::Uuid;

use haven_core::result::AppResult;
use haven_core::traits::repository::Repository;
use haven_entity::favorite::Favorite;

use super::FavoriteRepository;
use crate::record::favorite_key;

impl FavoriteRepository {
    /// Favorites of one user, newest first.
    pub async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Favorite>> {
        Ok(self.select(|f| f.user_id == user_id))
    }

    /// Save a listing for a user. Saving it twice is a conflict.
    pub async fn add(&self, user_id: &str, property_id: &str) -> AppResult<Favorite> {
        let favorite = Favorite {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            property_id: property_id.to_string(),
            created_at: Utc::now(),
        };
        self.create(favorite).await
    }

    /// Remove a saved listing. Returns `false` if it was not saved.
    pub async fn remove(&self, user_id: &str, property_id: &str) -> AppResult<bool> {
        match self.get_by_key(&favorite_key(user_id, property_id)) {
            Some(favorite) => self.delete(favorite.id.as_str()).await,
            None => Ok(false),
        }
    }
}
