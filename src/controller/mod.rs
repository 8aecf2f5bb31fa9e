//! Generic list management: filter, paginate and mutate a collection of records.
//!
//! Every list-bearing dashboard page is a [`ListController`] parameterized by a
//! record type. The record type decides which fields the search box looks at
//! and which field the category select box constrains (see
//! [`Record`](crate::record::Record)); the controller supplies the rest:
//!
//! - **Search**: trimmed, case-insensitive substring match over the record's
//!   search fields.
//! - **Category**: exact match on the record's category, or `All`.
//! - **Pagination**: fixed page size, 1-based page index that always stays in
//!   `1..=total_pages()`; changing a filter goes back to page 1 and removals
//!   clamp the page when the last page disappears.
//! - **Mutation**: add/prepend with fresh never-reused ids, update in place
//!   preserving id and position, remove without reordering, clear.
//!
//! All operations are total. Unknown ids and out-of-range pages are no-ops;
//! only the validating `try_*` mutations return errors.

mod api;
mod filtering;
mod model;
mod types;

#[cfg(test)]
mod tests;

pub use model::{ListController, DEFAULT_PAGE_SIZE};
pub use types::{CategoryFilter, SortFn, ViewState};
