//! Pagination query parameter extractor.

use serde::Deserialize;

use haven_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};

/// Raw `?page=&limit=` parameters.
///
/// Values are kept as strings so that junk like `?page=abc` falls back to the
/// defaults instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based).
    pub page: Option<String>,
    /// Items per page (1..=100).
    pub limit: Option<String>,
}

impl PaginationParams {
    /// Converts to a normalized `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(
            parse_or(self.page.as_deref(), 1),
            parse_or(self.limit.as_deref(), DEFAULT_PAGE_SIZE as i64),
        )
    }
}

/// `?limit=` for the short "recent" lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitParams {
    /// Number of items, 1..=100.
    pub limit: Option<String>,
}

impl LimitParams {
    /// The requested limit, or `default` when missing or out of range.
    pub fn limit_or(&self, default: usize) -> usize {
        match parse_or(self.limit.as_deref(), default as i64) {
            n @ 1..=100 => n as usize,
            _ => default,
        }
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
