//! Handler types for paginated endpoints

use pagekit_core::{PageRequest, PageResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_page() -> u64 {
    1
}
fn default_page_size() -> u64 {
    10
}

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, 1-based (default: 1)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        PageRequest::new(query.page, query.page_size)
    }
}

/// Page metadata attached to a paginated response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageMeta {
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
}

/// Paginated response envelope
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> From<PageResponse<T>> for Paged<T> {
    fn from(response: PageResponse<T>) -> Self {
        Self {
            pagination: PageMeta {
                page: response.page,
                page_size: response.page_size,
                total_count: response.total,
                total_pages: response.total_pages,
            },
            data: response.data,
        }
    }
}
