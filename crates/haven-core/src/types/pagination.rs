//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size, also used when the requested size is out of range.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request from raw, possibly out-of-range, values.
    ///
    /// Pages below 1 become 1. A limit outside `1..=100` falls back to the
    /// default instead of being clamped.
    pub fn new(page: i64, limit: i64) -> Self {
        let page = if page < 1 { 1 } else { page as u64 };
        let limit = if (1..=MAX_PAGE_SIZE as i64).contains(&limit) {
            limit as u64
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self { page, limit }
    }

    /// Number of items to skip.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(data: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            data,
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(request.limit.max(1)),
        }
    }

    /// Slice an already-ordered collection into the requested page.
    pub fn from_items(items: Vec<T>, request: &PageRequest) -> Self {
        let total = items.len() as u64;
        let data = items
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit as usize)
            .collect();
        Self::new(data, request, total)
    }
}
