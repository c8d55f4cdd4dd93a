//! Page math shared by the list view-models.
//!
//! The pager is only rendered when the result set spans more than one page:
//! `total_pages` is `0` whenever everything fits on a single page, and every
//! clamp (`next`, count-driven reset, last-page flag) works off that value.

/// Number of pager buttons for `total_records` at `page_size` records per
/// page. Returns `0` when the result set fits on one page (pager hidden).
pub fn total_pages(total_records: u64, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    let pages = (total_records as usize).div_ceil(page_size.max(1));
    if pages > 1 { pages } else { 0 }
}

/// Button numbers to render: `[1..=total_pages]`, empty when the pager is
/// hidden.
pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_page_result_counts_ceiling() {
        assert_eq!(total_pages(7, 3), 3);
        assert_eq!(total_pages(6, 3), 2);
        assert_eq!(total_pages(100, 3), 34);
    }

    #[test]
    fn single_page_result_hides_pager() {
        assert_eq!(total_pages(0, 3), 0);
        assert_eq!(total_pages(2, 3), 0);
        assert_eq!(total_pages(3, 3), 0);
    }

    #[test]
    fn page_numbers_match_total() {
        assert_eq!(page_numbers(3), vec![1, 2, 3]);
        assert!(page_numbers(0).is_empty());
    }

    #[test]
    fn pager_empty_iff_total_pages_zero() {
        for records in 0..20u64 {
            for size in 1..5usize {
                let pages = total_pages(records, size);
                assert_eq!(pages == 0, page_numbers(pages).is_empty());
            }
        }
    }
}
