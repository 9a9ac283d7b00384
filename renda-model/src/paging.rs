//! Fixed-size page windowing over the filtered-and-sorted list.

/// How many holdings one page shows.
pub const PRODUCTS_PER_PAGE: usize = 5;

/// Half-open index window `[first, last)` for a 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub first: usize,
    pub last: usize,
}

impl PageWindow {
    /// Window for `page` with `per_page` items per page.
    ///
    /// `page` is 1-based; page 0 is treated as page 1 so a degenerate
    /// caller cannot underflow the arithmetic. The window is not
    /// bounded by any collection length; apply it with [`slice`].
    pub fn for_page(page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let last = page * per_page;
        PageWindow {
            first: last - per_page,
            last,
        }
    }

    /// Apply this window to `items`, clamping to the slice bounds.
    ///
    /// Windows past the end yield a shorter or empty slice, never an
    /// error. The current page is deliberately never clamped when the
    /// filtered set shrinks, so an empty page is a legitimate outcome.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let first = self.first.min(items.len());
        let last = self.last.min(items.len());
        &items[first..last]
    }
}

/// Number of pages needed to show `total` items.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_are_contiguous_and_half_open() {
        assert_eq!(
            PageWindow::for_page(1, 5),
            PageWindow { first: 0, last: 5 }
        );
        assert_eq!(
            PageWindow::for_page(2, 5),
            PageWindow { first: 5, last: 10 }
        );
        assert_eq!(
            PageWindow::for_page(3, 5),
            PageWindow { first: 10, last: 15 }
        );
    }

    #[test]
    fn twelve_items_paginate_as_five_five_two_zero() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(PageWindow::for_page(1, 5).slice(&items), &items[0..5]);
        assert_eq!(PageWindow::for_page(2, 5).slice(&items), &items[5..10]);
        assert_eq!(PageWindow::for_page(3, 5).slice(&items), &items[10..12]);
        assert!(PageWindow::for_page(4, 5).slice(&items).is_empty());
    }

    #[test]
    fn empty_collection_yields_empty_pages() {
        let items: [u32; 0] = [];
        assert!(PageWindow::for_page(1, 5).slice(&items).is_empty());
        assert!(PageWindow::for_page(7, 5).slice(&items).is_empty());
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        let items: Vec<u32> = (0..3).collect();
        assert_eq!(PageWindow::for_page(0, 5).slice(&items), &items[0..3]);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(3, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(12, 5), 3);
    }
}
