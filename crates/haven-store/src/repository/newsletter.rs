//! Newsletter subscription management.

use chrono::Utc;
use uuid::Uuid;

use haven_core::result::AppResult;
use haven_core::traits::repository::Repository;
use haven_entity::newsletter::NewsletterSubscriber;

use super::NewsletterRepository;
use crate::record::email_key;

impl NewsletterRepository {
    /// Find a subscriber by e-mail, ignoring case.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<NewsletterSubscriber>> {
        Ok(self.get_by_key(&email_key(email)))
    }

    /// Subscribe an address, reactivating it if it unsubscribed earlier.
    ///
    /// Returns the subscriber and whether a new row was created.
    pub async fn subscribe(
        &self,
        email: &str,
        name: &str,
    ) -> AppResult<(NewsletterSubscriber, bool)> {
        if let Some(existing) = self.get_by_key(&email_key(email)) {
            let updated = self
                .modify(&existing.id, |s| s.resubscribe(name))
                .unwrap_or(existing);
            return Ok((updated, false));
        }

        let subscriber = NewsletterSubscriber {
            id: Uuid::new_v4().to_string(),
            email: email.trim().to_string(),
            name: name.to_string(),
            active: true,
            created_at: Utc::now(),
            unsub_at: None,
        };
        let created = self.create(subscriber).await?;
        Ok((created, true))
    }

    /// Deactivate an address. Returns `None` when it was never subscribed.
    pub async fn unsubscribe(&self, email: &str) -> AppResult<Option<NewsletterSubscriber>> {
        let Some(existing) = self.get_by_key(&email_key(email)) else {
            return Ok(None);
        };
        Ok(self.modify(&existing.id, NewsletterSubscriber::unsubscribe))
    }

    /// Number of active subscribers.
    pub async fn active_count(&self) -> AppResult<u64> {
        Ok(self.count_where(|s| s.active))
    }
}
