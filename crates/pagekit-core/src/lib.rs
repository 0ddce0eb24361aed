//! Core pagination types and page arithmetic shared across the pagekit crates

pub mod math;
pub mod types;

pub use math::{offset_limit, total_pages};
pub use types::{PageRequest, PageResponse, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

// Re-export external dependencies
pub use serde;
