//! Row metadata the in-memory tables need from each entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

use haven_entity::blog::BlogPost;
use haven_entity::brochure::BrochureRequest;
use haven_entity::contact::ContactSubmission;
use haven_entity::favorite::Favorite;
use haven_entity::newsletter::NewsletterSubscriber;
use haven_entity::property::Property;
use haven_entity::review::Review;
use haven_entity::user::User;

/// An entity stored in a [`MemoryTable`](crate::MemoryTable).
pub trait Record: Clone + Send + Sync + Serialize + 'static {
    /// Human-readable entity name used in error messages.
    const NAME: &'static str;

    /// Primary key.
    fn id(&self) -> &str;

    /// Creation time; listings are returned newest first.
    fn created_at(&self) -> DateTime<Utc>;

    /// Secondary key that must be unique across the table, if any.
    fn unique_key(&self) -> Option<String> {
        None
    }
}

/// Normalized form of an e-mail address used as a lookup key.
pub fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Key identifying one user's favorite of one property.
pub fn favorite_key(user_id: &str, property_id: &str) -> String {
    format!("{user_id}:{property_id}")
}

impl Record for User {
    const NAME: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn unique_key(&self) -> Option<String> {
        Some(email_key(&self.email))
    }
}

impl Record for Property {
    const NAME: &'static str = "Property";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.slug.clone())
    }
}

impl Record for BlogPost {
    const NAME: &'static str = "Blog post";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.slug.clone())
    }
}

impl Record for ContactSubmission {
    const NAME: &'static str = "Contact submission";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for NewsletterSubscriber {
    const NAME: &'static str = "Subscriber";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn unique_key(&self) -> Option<String> {
        Some(email_key(&self.email))
    }
}

impl Record for Review {
    const NAME: &'static str = "Review";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for Favorite {
    const NAME: &'static str = "Favorite";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn unique_key(&self) -> Option<String> {
        Some(favorite_key(&self.user_id, &self.property_id))
    }
}

impl Record for BrochureRequest {
    const NAME: &'static str = "Brochure request";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
