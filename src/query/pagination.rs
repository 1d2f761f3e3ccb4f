//! Page arithmetic for list views.

use std::ops::RangeInclusive;

/// Items per page requested by every list view.
pub const PAGE_SIZE: u32 = 10;

/// `ceil(total_items / page_size)`, never less than one page.
pub fn page_count(total_items: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_items.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Current page plus the server-reported item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    total_items: u64,
    page_size: u32,
}

impl Pagination {
    pub fn new(current_page: u32, total_items: u64) -> Self {
        Self::with_page_size(current_page, total_items, PAGE_SIZE)
    }

    pub fn with_page_size(current_page: u32, total_items: u64, page_size: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            total_items,
            page_size,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn page_count(&self) -> u32 {
        page_count(self.total_items, self.page_size)
    }

    /// Page numbers the pagination control renders.
    pub fn pages(&self) -> RangeInclusive<u32> {
        1..=self.page_count()
    }

    pub fn is_current(&self, page: u32) -> bool {
        page == self.current_page
    }

    /// Moves back one page. Returns `false` (no-op) on the first page.
    pub fn go_to_previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            return true;
        }
        false
    }

    /// Moves forward one page. Returns `false` (no-op) on the last page.
    pub fn go_to_next(&mut self) -> bool {
        if self.current_page < self.page_count() {
            self.current_page += 1;
            return true;
        }
        false
    }

    /// Jumps to `page`. The rendered control only offers `pages()`; other
    /// values are the caller's responsibility and are not checked here.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }
}
