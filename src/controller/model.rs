//! The `ListController` struct, its construction and plain accessors.

use super::types::{CategoryFilter, SortFn};
use crate::paginator;
use crate::record::{IdSequence, Record, RecordId};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A collection of records with search, category filter, pagination and
/// CRUD mutation.
///
/// The controller owns its records exclusively. Every read (`visible_items`,
/// `total_pages`, ...) is recomputed from the current state; every write
/// keeps the page index inside `1..=total_pages()`.
///
/// # Examples
///
/// ```
/// use admin_widgets::controller::ListController;
/// use admin_widgets::records::{Activity, ActivityCategory};
///
/// let mut list = ListController::new(vec![
///     Activity::new("Awin", "Signed in", ActivityCategory::Auth),
///     Activity::new("Rina", "Changed settings", ActivityCategory::Settings),
///     Activity::new("Budi", "Failed sign in", ActivityCategory::Auth),
/// ])
/// .with_page_size(5);
///
/// list.set_category_filter("Auth");
/// assert_eq!(list.visible_items().len(), 2);
/// assert_eq!(list.total_pages(), 1);
///
/// list.set_search_term("  FAILED ");
/// assert_eq!(list.visible_items()[0].user, "Budi");
/// ```
#[derive(Clone)]
pub struct ListController<R: Record> {
    pub(super) items: Vec<R>,
    pub(super) ids: IdSequence,

    // Filter
    pub(super) search_term: String,
    pub(super) needle: String,
    pub(super) category: CategoryFilter,

    // Pagination
    pub(super) paginator: paginator::Model,

    pub(super) sort: Option<SortFn<R>>,
}

impl<R: Record> ListController<R> {
    /// Creates a controller seeded with `items`, in order.
    ///
    /// Seed records keep their ids. Records with an unassigned id, an id
    /// already used by an earlier seed record, or an id above
    /// [`IdSequence::MAX_RESERVED`] get a fresh id.
    pub fn new(mut items: Vec<R>) -> Self {
        let mut ids = IdSequence::new();
        for item in &items {
            ids.observe(item.id());
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in items.iter_mut() {
            let id = item.id();
            if IdSequence::accepts(id) && seen.insert(id) {
                continue;
            }
            let fresh = ids.next_id();
            if id.is_assigned() {
                warn!(rejected = %id, replacement = %fresh, "seed id duplicate or out of range, replaced");
            }
            item.set_id(fresh);
            seen.insert(fresh);
        }

        let mut paginator = paginator::Model::new().with_per_page(DEFAULT_PAGE_SIZE);
        paginator.set_total_items(items.len());

        Self {
            items,
            ids,
            search_term: String::new(),
            needle: String::new(),
            category: CategoryFilter::All,
            paginator,
            sort: None,
        }
    }

    /// Sets the number of records per page (builder pattern). Zero is clamped to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.paginator.set_per_page(page_size);
        self.paginator.reset();
        self.sync_pagination();
        self
    }

    /// Orders the filtered view with `cmp` (builder pattern).
    ///
    /// The stored collection keeps its insertion order; only
    /// `filtered_items` and `visible_items` are sorted.
    pub fn with_sort<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&R, &R) -> Ordering + Send + Sync + 'static,
    {
        self.sort = Some(Arc::new(cmp));
        self
    }

    /// All records in collection order.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Number of records in the collection, ignoring filters.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// True if a record with this id exists.
    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    /// Index of the record in collection order.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// The current 1-based page.
    pub fn page_index(&self) -> usize {
        self.paginator.page
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.paginator.per_page
    }

    /// The current trimmed search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The current category constraint.
    pub fn category_filter(&self) -> &CategoryFilter {
        &self.category
    }

    /// Read access to the paginator, e.g. for rendering.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// Recomputes the page count and clamps the page index into range.
    pub(super) fn sync_pagination(&mut self) {
        let count = self.filtered_count();
        self.paginator.set_total_items(count);
    }
}

impl<R: Record> Default for ListController<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Record + fmt::Debug> fmt::Debug for ListController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListController")
            .field("items", &self.items)
            .field("search_term", &self.search_term)
            .field("category", &self.category)
            .field("page", &self.paginator.page)
            .field("page_size", &self.paginator.per_page)
            .field("sorted", &self.sort.is_some())
            .finish()
    }
}
