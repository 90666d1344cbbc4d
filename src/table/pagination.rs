//! Pagination

/// Rows per page when none is chosen.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Rows on 1-based `page` with `per_page` rows per page.
///
/// Page `0` is treated as the first page and a `per_page` of `0` as `1`. A
/// page past the end is empty.
#[must_use]
pub fn paginate<T>(rows: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(rows.len());

    rows.get(start..end).unwrap_or_default()
}

/// Number of pages needed for `total` rows; never less than one.
#[must_use]
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_pages_of_ten_by_default() {
        let rows: Vec<u32> = (1..=23).collect();

        assert_eq!(paginate(&rows, 1, DEFAULT_PER_PAGE).len(), 10);
        assert_eq!(paginate(&rows, 3, DEFAULT_PER_PAGE), [21, 22, 23]);
        assert_eq!(page_count(rows.len(), DEFAULT_PER_PAGE), 3);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let rows = [1, 2, 3];

        assert!(paginate(&rows, 2, 3).is_empty());
        assert!(paginate(&rows, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn degenerate_arguments() {
        let rows = [1, 2, 3];

        assert_eq!(paginate(&rows, 0, 2), [1, 2]);
        assert_eq!(paginate(&rows, 2, 0), [2]);
        assert_eq!(page_count(0, 10), 1);
    }
}
