//! # haven-entity
//!
//! Domain entity models for Haven Communities. Every struct in this crate
//! represents a record in the managed datastore or a domain value object.
//! All entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod blog;
pub mod brochure;
pub mod contact;
pub mod favorite;
pub mod newsletter;
pub mod property;
pub mod review;
pub mod user;
