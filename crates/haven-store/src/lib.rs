//! # haven-store
//!
//! In-memory implementations of the repository traits from `haven-core`,
//! backed by [dashmap](https://crates.io/crates/dashmap). The managed
//! datastore the site runs against in production is external; this crate
//! keeps the API runnable and testable on its own.

pub mod record;
pub mod repository;
pub mod seed;
pub mod table;

use tracing::info;

pub use record::Record;
pub use repository::{
    BlogRepository, BrochureRepository, ContactRepository, FavoriteRepository,
    NewsletterRepository, PropertyRepository, ReviewRepository, UserRepository,
};
pub use table::MemoryTable;

/// Every table the API reads and writes.
///
/// Cloning is cheap: each table is a handle onto shared maps.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Registered accounts.
    pub users: UserRepository,
    /// Property listings.
    pub properties: PropertyRepository,
    /// Blog posts.
    pub blog: BlogRepository,
    /// Contact form submissions.
    pub contacts: ContactRepository,
    /// Newsletter subscribers.
    pub newsletter: NewsletterRepository,
    /// Property reviews.
    pub reviews: ReviewRepository,
    /// Saved listings.
    pub favorites: FavoriteRepository,
    /// Brochure download requests.
    pub brochures: BrochureRepository,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        info!("Initializing in-memory store");
        Self::default()
    }
}
