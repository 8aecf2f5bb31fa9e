//! Search, category filtering and page navigation.
//!
//! Filtering is recomputed on every read; collections are small and nothing
//! is cached. Changing either filter sends the view back to page 1.

use super::types::{CategoryFilter, ViewState};
use super::ListController;
use crate::record::Record;
use tracing::{debug, trace};

impl<R: Record> ListController<R> {
    /// Sets the free-text search. The term is trimmed and matched
    /// case-insensitively as a substring of the record's search fields.
    /// An empty term clears the search. Always resets the page to 1.
    pub fn set_search_term(&mut self, term: &str) {
        let trimmed = term.trim();
        self.search_term = trimmed.to_string();
        self.needle = trimmed.to_lowercase();
        self.paginator.reset();
        self.sync_pagination();
        debug!(term = %self.search_term, matches = self.filtered_count(), "search term set");
    }

    /// Sets the category constraint; `"all"` removes it. Always resets the
    /// page to 1.
    pub fn set_category_filter(&mut self, value: impl Into<CategoryFilter>) {
        self.category = value.into();
        self.paginator.reset();
        self.sync_pagination();
        debug!(category = %self.category, matches = self.filtered_count(), "category filter set");
    }

    /// Removes both the search term and the category constraint.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.needle.clear();
        self.category = CategoryFilter::All;
        self.paginator.reset();
        self.sync_pagination();
    }

    /// True if the record passes the search term and the category filter.
    pub fn matches(&self, item: &R) -> bool {
        item.matches_search(&self.needle) && self.category.matches(item.category().as_deref())
    }

    /// All records passing the filters, in view order.
    pub fn filtered_items(&self) -> Vec<&R> {
        let mut filtered: Vec<&R> = self.items.iter().filter(|item| self.matches(item)).collect();
        if let Some(cmp) = &self.sort {
            filtered.sort_by(|a, b| cmp(*a, *b));
        }
        filtered
    }

    /// Number of records passing the filters.
    pub fn filtered_count(&self) -> usize {
        self.items.iter().filter(|item| self.matches(item)).count()
    }

    /// The records on the current page.
    pub fn visible_items(&self) -> Vec<&R> {
        let filtered = self.filtered_items();
        let (start, end) = self.paginator.slice_bounds(filtered.len());
        filtered[start..end].to_vec()
    }

    /// `max(1, ceil(filtered_count / page_size))`.
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size()).max(1)
    }

    /// Moves to page `page`. Requests outside `1..=total_pages()` are
    /// ignored and the current page is kept. Returns true if applied.
    pub fn set_page(&mut self, page: usize) -> bool {
        let applied = self.paginator.set_page(page);
        trace!(requested = page, page = self.paginator.page, applied, "set page");
        applied
    }

    /// Goes to the next page if there is one.
    pub fn next_page(&mut self) {
        self.paginator.next_page();
        trace!(page = self.paginator.page, "next page");
    }

    /// Goes to the previous page if there is one.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
        trace!(page = self.paginator.page, "previous page");
    }

    /// Snapshot of the current view parameters.
    pub fn view_state(&self) -> ViewState {
        let filtered_count = self.filtered_count();
        ViewState {
            search_term: self.search_term.clone(),
            category: self.category.clone(),
            page_index: self.page_index(),
            page_size: self.page_size(),
            total_pages: filtered_count.div_ceil(self.page_size()).max(1),
            filtered_count,
            total_count: self.len(),
        }
    }
}
