//! Core type definitions used across the Haven workspace.

pub mod pagination;
pub mod response;
pub mod slug;

pub use pagination::{PageRequest, PageResponse};
pub use response::{ApiErrorResponse, SuccessResponse};
pub use slug::slugify;
