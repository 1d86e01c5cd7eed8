//! # haven-api
//!
//! HTTP API layer for Haven Communities built on Axum.
//!
//! Provides the REST endpoints, the identity and role-gate middleware,
//! CORS and request logging, extractors, and DTOs. Errors render through
//! `haven_core::AppError` as `{error, message, code}`.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, init_state, run_server};
pub use state::AppState;
