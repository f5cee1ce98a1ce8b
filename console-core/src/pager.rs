//! Pagination cursor
//!
//! Fixed page size, 1-based page number, clamped navigation. Boundary
//! navigation is a no-op, not an error.

/// Pagination cursor over an already-filtered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages for a list of `len` items, never less than 1
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// The visible slice of `items` for the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Advance a page; no-op at the last page
    pub fn next(&mut self, len: usize) {
        if self.page < self.total_pages(len) {
            self.page += 1;
        }
    }

    /// Go back a page; no-op at page 1
    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Back to page 1 (any filter or search change lands here)
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pull the page back into range after the list shrank
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.min(self.total_pages(len));
    }
}
