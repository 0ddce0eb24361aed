//! Pagination request and response shapes

use serde::{Deserialize, Serialize};

/// Page requested when the caller does not specify one.
pub const DEFAULT_PAGE: u64 = 1;

/// Rows per page when the caller does not specify a size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Hard cap on rows per page.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Common pagination parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Some(DEFAULT_PAGE),
            page_size: Some(DEFAULT_PAGE_SIZE),
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Clamp to a usable window: page >= 1, 1 <= page_size <= [`MAX_PAGE_SIZE`].
    pub fn normalize(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);
        let page_size = self
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE)
            .max(1);
        (page, page_size)
    }
}

/// One page of rows together with the window that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub total: u64,
    pub data: Vec<T>,
}

impl<T> PageResponse<T> {
    /// Empty page for a zero-row result.
    pub fn empty(page: u64, page_size: u64) -> Self {
        Self {
            page,
            page_size,
            total_pages: 0,
            total: 0,
            data: Vec::new(),
        }
    }

    /// Convert the row type while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PageResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PageResponse {
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total: self.total,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
