#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{QueryError, QueryResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a result set.
///
/// `start_index` and `end_index` bound the page within the full result
/// (`end_index` exclusive). For a page past the end both sit at the same
/// offset and `items` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Same page with every item passed through `f`.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }
}

/// Checks a page size coming from a signed source.
pub fn page_size(value: i64) -> QueryResult<usize> {
    match usize::try_from(value) {
        Ok(size) if size > 0 => Ok(size),
        _ => QueryError::invalid_argument(format!("page size must be positive, got {value}")),
    }
}

pub(crate) fn check_page_size(page_size: usize) -> QueryResult<()> {
    if page_size == 0 {
        return QueryError::invalid_argument("page size must be positive, got 0");
    }
    Ok(())
}

/// Cuts `items` into pages of `page_size` and returns page `page` (1-based).
///
/// The page number is not clamped: asking for a page outside
/// `1..=total_pages` gives an empty page rather than an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> QueryResult<Page<T>> {
    check_page_size(page_size)?;

    let total = items.len();
    let total_pages = total.div_ceil(page_size);

    let (start_index, end_index) = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size);
            (start, start.saturating_add(page_size).min(total).max(start))
        }
        None => (0, 0),
    };

    let items = items.get(start_index..end_index).unwrap_or_default().to_vec();

    Ok(Page {
        items,
        page,
        page_size,
        total,
        total_pages,
        start_index,
        end_index,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(matches!(
            paginate(&[1, 2, 3], 1, 0),
            Err(QueryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_page_size_from_signed() {
        assert_eq!(page_size(25), Ok(25));
        assert!(page_size(0).is_err());
        assert!(page_size(-10).is_err());
    }

    #[test]
    fn test_empty_input_has_no_pages() {
        let page = paginate::<u32>(&[], 1, 10).unwrap();
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn test_partial_last_page() {
        let items = (0..23).collect::<Vec<_>>();
        let page = paginate(&items, 3, 10).unwrap();
        assert_eq!(page.items, vec![20, 21, 22]);
        assert_eq!(page.total_pages, 3);
        assert_eq!((page.start_index, page.end_index), (20, 23));
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_zero_is_empty() {
        let items = (0..5).collect::<Vec<_>>();
        let page = paginate(&items, 0, 2).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let items = (0..5).collect::<Vec<_>>();
        let page = paginate(&items, usize::MAX, 2).unwrap();
        assert!(page.is_empty());
    }
}
