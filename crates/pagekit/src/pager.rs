//! Page-window execution over a base `Select<E>` query

use pagekit_core::{offset_limit, total_pages, PageRequest, PageResponse};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QuerySelect, Select};
use tracing::debug;

use crate::errors::PageError;

/// A base query together with its computed page window.
///
/// Built with [`Pager::new`] for explicit page numbers or through
/// [`PaginateExt::page`] for caller-supplied, unvalidated parameters.
#[derive(Debug, Clone)]
pub struct Pager<E>
where
    E: EntityTrait,
{
    query: Select<E>,
    page: u64,
    page_size: u64,
}

impl<E> Pager<E>
where
    E: EntityTrait,
{
    pub fn new(query: Select<E>, page: u64, page_size: u64) -> Self {
        Self {
            query,
            page,
            page_size,
        }
    }

    /// Count the matching rows, then fetch the requested page of them.
    ///
    /// A zero page size is rejected before anything touches the database.
    /// Errors from the underlying count or fetch are surfaced unchanged.
    pub async fn fetch<C>(self, db: &C) -> Result<PageResponse<E::Model>, PageError>
    where
        C: ConnectionTrait,
        E::Model: Send + Sync,
    {
        if self.page_size == 0 {
            return Err(PageError::InvalidPageSize);
        }
        let page = self.page.max(1);

        let total = self.query.clone().count(db).await?;
        if total == 0 {
            debug!("No rows matched; returning empty page {}", page);
            return Ok(PageResponse::empty(page, self.page_size));
        }
        let total_pages = total_pages(total, self.page_size);
        let (offset, limit) = offset_limit(page, self.page_size);

        debug!(
            "Fetching page {} (limit {}, offset {}) of {} rows",
            page, limit, offset, total
        );

        let data = self.query.limit(limit).offset(offset).all(db).await?;

        Ok(PageResponse {
            page,
            page_size: self.page_size,
            total_pages,
            total,
            data,
        })
    }

    /// Fetch the page and convert each row on the way out.
    pub async fn fetch_into<C, T>(self, db: &C) -> Result<PageResponse<T>, PageError>
    where
        C: ConnectionTrait,
        E::Model: Send + Sync,
        T: From<E::Model>,
    {
        Ok(self.fetch(db).await?.map(T::from))
    }
}

/// Attach a page window to any `Select<E>`.
pub trait PaginateExt<E>
where
    E: EntityTrait,
{
    /// Build a [`Pager`] from caller-supplied parameters, normalizing them
    /// to a usable window first.
    fn page(self, request: &PageRequest) -> Pager<E>;
}

impl<E> PaginateExt<E> for Select<E>
where
    E: EntityTrait,
{
    fn page(self, request: &PageRequest) -> Pager<E> {
        let (page, page_size) = request.normalize();
        Pager::new(self, page, page_size)
    }
}
