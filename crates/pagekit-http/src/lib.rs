//! HTTP-facing pagination types
//!
//! Query-string parameters with serde defaults plus the paginated response
//! envelope handlers return, with OpenAPI schemas for both.

mod types;

pub use types::{PageMeta, PageQuery, Paged};
