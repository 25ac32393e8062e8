//! Page slicing for admin grids.

use std::ops::Range;

/// One page cut out of a larger, already ordered sequence.
///
/// The page keeps the order of the source and remembers how many elements
/// the source held, so grids can render a pager without a second query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    items: Vec<T>,
    total_count: usize,
}

impl<T> PagedList<T> {
    /// Slice `source` to the page at the zero based `page_index`.
    ///
    /// A page past the end of `source`, or a `page_size` of zero, yields an
    /// empty page while still reporting the full `total_count`.
    pub fn new(source: Vec<T>, page_index: u32, page_size: u32) -> Self {
        let total_count = source.len();
        let range = page_range(total_count, page_index, page_size);

        let items = source
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect();

        Self { items, total_count }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }
}

/// Index range of the page inside a sequence of `total` elements.
pub fn page_range(total: usize, page_index: u32, page_size: u32) -> Range<usize> {
    let size = usize::try_from(page_size).unwrap_or(usize::MAX);
    let skip = usize::try_from(page_index)
        .unwrap_or(usize::MAX)
        .saturating_mul(size);

    let start = skip.min(total);
    let end = start.saturating_add(size).min(total);

    start..end
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn first_page_keeps_source_order() {
        let page = PagedList::new(vec!["a", "b", "c"], 0, 2);

        assert_eq!(page.items(), &["a", "b"]);
        assert_eq!(page.total_count(), 3);
    }

    #[test]
    fn last_page_is_partial() {
        let page = PagedList::new(vec!["a", "b", "c"], 1, 2);

        assert_eq!(page.items(), &["c"]);
        assert_eq!(page.total_count(), 3);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = PagedList::new(vec![1, 2, 3], 7, 2);

        assert!(page.items().is_empty());
        assert_eq!(page.total_count(), 3);
    }

    #[test]
    fn zero_page_size_degenerates_to_an_empty_page() {
        let page = PagedList::new(vec![1, 2, 3], 0, 0);

        assert!(page.items().is_empty());
        assert_eq!(page.total_count(), 3);
    }

    #[test]
    fn huge_page_index_does_not_overflow() {
        assert_eq!(page_range(10, u32::MAX, u32::MAX), 10..10);
    }

    proptest! {
        #[test]
        fn page_is_a_contiguous_slice_of_the_source(
            len in 0usize..64,
            page_index in 0u32..40,
            page_size in 1u32..20,
        ) {
            let source: Vec<usize> = (0..len).collect();
            let page = PagedList::new(source.clone(), page_index, page_size);

            prop_assert!(page.items().len() <= usize::try_from(page_size).unwrap());
            prop_assert_eq!(page.total_count(), len);

            let range = page_range(len, page_index, page_size);
            prop_assert_eq!(page.items(), source.get(range).unwrap());
        }
    }
}
