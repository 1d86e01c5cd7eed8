//! User lookups.

use chrono::Utc;

use haven_core::result::AppResult;
use haven_entity::user::User;

use super::UserRepository;
use crate::record::email_key;

impl UserRepository {
    /// Find a user by e-mail, ignoring case and surrounding whitespace.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.get_by_key(&email_key(email)))
    }

    /// Update a user's display names.
    pub async fn update_names(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<User>> {
        Ok(self.modify(id, |user| {
            user.first_name = first_name.to_string();
            user.last_name = last_name.to_string();
            user.updated_at = Utc::now();
        }))
    }
}

#[cfg(test)]
mod tests {
    use haven_core::traits::repository::Repository;
    use haven_entity::user::UserRole;

    use super::*;

    #[tokio::test]
    async fn test_find_by_email_is_case_insensitive() {
        let repo = UserRepository::new();
        let user = repo
            .create(User::new("Jane@Example.com", "h", "Jane", "Doe", UserRole::User))
            .await
            .unwrap();
        let found = repo.find_by_email(" jane@example.COM ").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(repo.find_by_email("other@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_names_keeps_credentials() {
        let repo = UserRepository::new();
        let user = repo
            .create(User::new("a@example.com", "digest", "A", "B", UserRole::Admin))
            .await
            .unwrap();
        let updated = repo.update_names(&user.id, "Ann", "Bee").await.unwrap().unwrap();
        assert_eq!(updated.first_name, "Ann");
        assert_eq!(updated.last_name, "Bee");
        assert_eq!(updated.password_hash, "digest");
        assert_eq!(updated.role, UserRole::Admin);
        assert!(repo.update_names("missing", "x", "y").await.unwrap().is_none());
    }
}
