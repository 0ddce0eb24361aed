//! Error types for the pagination layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Invalid page size: page size must be greater than zero")]
    InvalidPageSize,
}
