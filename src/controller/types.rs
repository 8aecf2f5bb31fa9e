//! View-state types shared by the controller and the list view.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Comparator defining a view order for the filtered records.
pub type SortFn<R> = Arc<dyn Fn(&R, &R) -> Ordering + Send + Sync>;

/// Constraint on a record's categorical field.
///
/// `"all"` (in any case) and the empty string both parse to [`CategoryFilter::All`].
///
/// ```
/// use admin_widgets::controller::CategoryFilter;
///
/// assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
/// assert_eq!(CategoryFilter::from("Auth"), CategoryFilter::Only("Auth".into()));
/// assert!(CategoryFilter::from("Auth").matches(Some("Auth")));
/// assert!(!CategoryFilter::from("Auth").matches(Some("auth")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No constraint.
    #[default]
    All,
    /// Exact match on the category value.
    Only(String),
}

impl CategoryFilter {
    /// Keyword accepted as "no constraint".
    pub const ALL: &'static str = "all";

    /// Parses a filter value coming from a select box.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(trimmed.to_string())
        }
    }

    /// True if a record with the given category passes the filter.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted.as_str()),
        }
    }

    /// True for [`CategoryFilter::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// The filter as select-box text.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Only(value) => value,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::parse(value)
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::parse(&value)
    }
}

impl<T: AsRef<str>> From<Option<T>> for CategoryFilter {
    fn from(value: Option<T>) -> Self {
        value
            .map(|v| CategoryFilter::parse(v.as_ref()))
            .unwrap_or_default()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a controller's view parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Current (trimmed) search term.
    pub search_term: String,
    /// Current category constraint.
    pub category: CategoryFilter,
    /// Current page, 1-based.
    pub page_index: usize,
    /// Records per page.
    pub page_size: usize,
    /// Number of pages for the filtered records, at least 1.
    pub total_pages: usize,
    /// Records passing the filters.
    pub filtered_count: usize,
    /// Records in the collection.
    pub total_count: usize,
}

impl ViewState {
    /// True when either a search term or a category constraint is active.
    pub fn is_filtered(&self) -> bool {
        !self.search_term.is_empty() || !self.category.is_all()
    }
}
