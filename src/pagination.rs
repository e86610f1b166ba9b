//! This module defines the page arithmetic for the customer table.

use crate::config::DEFAULT_ITEMS_PER_PAGE;

/// Page boundaries derived from `(total_items, current_page, items_per_page)`.
///
/// Indices are zero-based and half-open: the page covers
/// `start_index..end_index`. `end_index` is not clamped to `total_items`;
/// [`slice`](Pagination::slice) clamps against the data it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total_pages: u64,
    pub start_index: u64,
    pub end_index: u64,
}

impl Pagination {
    /// Compute the boundaries of `current_page` (1-based).
    ///
    /// `current_page` is not checked against `total_pages`; a page past the
    /// end slices to nothing. A `current_page` of zero is treated as page 1
    /// and an `items_per_page` of zero as one item per page.
    pub fn calculate(total_items: u64, current_page: u64, items_per_page: u64) -> Self {
        let per_page = items_per_page.max(1);
        let start_index = current_page.saturating_sub(1).saturating_mul(per_page);

        Self {
            total_pages: total_items.div_ceil(per_page),
            start_index,
            end_index: start_index.saturating_add(per_page),
        }
    }

    /// The items of this page, clamped to the bounds of `data`.
    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        let len = data.len();
        let start = usize::try_from(self.start_index).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(self.end_index).unwrap_or(usize::MAX).min(len);
        &data[start..end]
    }

    /// 1-based inclusive item numbers shown on this page, e.g. `(11, 20)`.
    ///
    /// `None` when the page holds no items.
    pub fn display_range(&self, total_items: u64) -> Option<(u64, u64)> {
        if self.start_index >= total_items {
            return None;
        }
        Some((self.start_index + 1, self.end_index.min(total_items)))
    }

    /// The page before `current`, never below page 1.
    pub fn previous_page(current: u64) -> u64 {
        current.saturating_sub(1).max(1)
    }

    /// The page after `current`, never past `total_pages` (or page 1 when empty).
    pub fn next_page(current: u64, total_pages: u64) -> u64 {
        current.saturating_add(1).min(total_pages).max(1)
    }
}

/// Paginate with the default page size of 10.
pub fn paginate(total_items: u64, current_page: u64) -> Pagination {
    Pagination::calculate(total_items, current_page, DEFAULT_ITEMS_PER_PAGE)
}

/// Page numbers to render as buttons.
///
/// Always includes the first and last page plus every page within two of
/// `current`, in ascending order.
pub fn visible_pages(current: u64, total_pages: u64) -> Vec<u64> {
    (1..=total_pages)
        .filter(|&page| is_visible(page, current, total_pages))
        .collect()
}

/// One slot of the page button strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u64),
    /// An ellipsis standing in for the hidden pages next to it.
    Gap,
}

/// The page button strip: [`visible_pages`] with a [`PageItem::Gap`] in
/// place of the page three away from `current` on either side, when that
/// page is not shown itself.
pub fn page_items(current: u64, total_pages: u64) -> Vec<PageItem> {
    (1..=total_pages)
        .filter_map(|page| {
            if is_visible(page, current, total_pages) {
                Some(PageItem::Page(page))
            } else if page.abs_diff(current) == 3 {
                Some(PageItem::Gap)
            } else {
                None
            }
        })
        .collect()
}

fn is_visible(page: u64, current: u64, total_pages: u64) -> bool {
    page == 1 || page == total_pages || page.abs_diff(current) <= 2
}
