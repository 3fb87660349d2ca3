//! Offset pagination math and paging metadata.

use serde::{Deserialize, Serialize};

/// Paging metadata describing a result window's position in the full set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub current_page: i64,
    pub size: i64,
    pub total_page: i64,
}

/// One page of results plus its paging metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pageable<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}

/// Total number of pages for `total` matching records at `size` per page.
///
/// `ceil(total / size)`; zero matches means zero pages, not one. Callers
/// must have validated `size >= 1`.
pub fn total_pages(total: i64, size: i64) -> i64 {
    (total + size - 1) / size
}

/// Number of records to skip for the given 1-based page.
pub fn offset(page: i64, size: i64) -> i64 {
    (page - 1) * size
}
