//! Core traits defined in `haven-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
