//! Newsletter subscription entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A newsletter subscription, keyed by e-mail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub id: String,
    pub email: String,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    /// When the address was unsubscribed.
    pub unsub_at: Option<DateTime<Utc>>,
}

impl NewsletterSubscriber {
    /// Marks the subscription inactive as of now.
    pub fn unsubscribe(&mut self) {
        self.active = false;
        self.unsub_at = Some(Utc::now());
    }

    /// Re-activates a previously cancelled subscription.
    pub fn resubscribe(&mut self, name: &str) {
        self.active = true;
        self.unsub_at = None;
        if !name.is_empty() {
            self.name = name.to_string();
        }
    }
}
