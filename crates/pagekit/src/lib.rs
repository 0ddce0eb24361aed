//! Pagination over sea-orm query builders
//!
//! Attach a page window to any `Select<E>` and fetch one page together with
//! the total row and page counts:
//!
//! ```ignore
//! use pagekit::{PageRequest, PaginateExt};
//!
//! let page = widgets::Entity::find()
//!     .page(&PageRequest::new(2, 10))
//!     .fetch(&db)
//!     .await?;
//! ```

mod errors;
mod pager;

pub use errors::PageError;
pub use pager::{PaginateExt, Pager};

// Re-export the core types so callers need only this crate
pub use pagekit_core::{PageRequest, PageResponse, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

pub use sea_orm;
