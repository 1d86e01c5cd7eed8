//! Entity-specific repositories.
//!
//! Each repository is a [`MemoryTable`] for its entity plus the lookups the
//! handlers need beyond the generic [`Repository`](haven_core::traits::repository::Repository)
//! operations.

pub mod blog;
pub mod brochure;
pub mod contact;
pub mod favorite;
pub mod newsletter;
pub mod property;
pub mod review;
pub mod user;

use haven_entity::blog::BlogPost;
use haven_entity::brochure::BrochureRequest;
use haven_entity::contact::ContactSubmission;
use haven_entity::favorite::Favorite;
use haven_entity::newsletter::NewsletterSubscriber;
use haven_entity::property::Property;
use haven_entity::review::Review;
use haven_entity::user::User;

use crate::table::MemoryTable;

/// Registered accounts, unique by case-insensitive e-mail.
pub type UserRepository = MemoryTable<User>;
/// Property listings, unique by slug.
pub type PropertyRepository = MemoryTable<Property>;
/// Blog posts, unique by slug.
pub type BlogRepository = MemoryTable<BlogPost>;
/// Contact form submissions.
pub type ContactRepository = MemoryTable<ContactSubmission>;
/// Newsletter subscribers, unique by case-insensitive e-mail.
pub type NewsletterRepository = MemoryTable<NewsletterSubscriber>;
/// Property reviews.
pub type ReviewRepository = MemoryTable<Review>;
/// Saved listings, unique per user and property.
pub type FavoriteRepository = MemoryTable<Favorite>;
/// Brochure download requests.
pub type BrochureRepository = MemoryTable<BrochureRequest>;
