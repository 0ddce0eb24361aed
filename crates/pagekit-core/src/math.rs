//! Page window arithmetic

/// Number of pages needed to cover `total` rows at `page_size` rows per page.
///
/// Rounds up so a short final page still counts as a page. Zero rows (or a
/// zero page size, which callers are expected to reject earlier) yield zero
/// pages. Exact for totals up to 2^53; beyond that the f64 conversion may
/// round the count itself.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if total == 0 || page_size == 0 {
        return 0;
    }
    (total as f64 / page_size as f64).ceil() as u64
}

/// SQL window for a 1-based page: `(offset, limit)`.
///
/// offset = (page - 1) * page_size, limit = page_size. Page 0 is treated as
/// page 1 rather than underflowing, and the offset saturates instead of
/// overflowing for absurd page numbers; a saturated offset lands past any
/// real table end and fetches an empty page.
pub fn offset_limit(page: u64, page_size: u64) -> (u64, u64) {
    (page.saturating_sub(1).saturating_mul(page_size), page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(99, 10), 10);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
        assert_eq!(total_pages(7, 1), 7);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        assert_eq!(total_pages(42, 0), 0);
    }

    #[test]
    fn test_total_pages_covers_all_rows() {
        // total_pages * page_size >= total, and one page fewer is not enough
        for total in [1u64, 9, 10, 11, 25, 99, 100, 101, 1000] {
            for page_size in [1u64, 3, 10, 20, 100] {
                let pages = total_pages(total, page_size);
                assert!(pages * page_size >= total, "{total}/{page_size}");
                assert!((pages - 1) * page_size < total, "{total}/{page_size}");
            }
        }
    }

    #[test]
    fn test_offset_limit() {
        assert_eq!(offset_limit(1, 10), (0, 10));
        assert_eq!(offset_limit(2, 10), (10, 10));
        assert_eq!(offset_limit(5, 25), (100, 25));
    }

    #[test]
    fn test_offset_limit_page_zero_does_not_underflow() {
        assert_eq!(offset_limit(0, 10), (0, 10));
    }

    #[test]
    fn test_offset_limit_huge_page_saturates() {
        assert_eq!(offset_limit(u64::MAX, 100), (u64::MAX, 100));
        assert_eq!(offset_limit(u64::MAX, 1), (u64::MAX - 1, 1));
    }
}
