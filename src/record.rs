//! The record contract implemented by every list item.
//!
//! A record has a stable [`RecordId`], a set of free-text fields matched by the
//! search box, at most one categorical field matched by the category filter,
//! a typed partial update (`Patch`) and form validation.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Stable identifier of a record within its collection.
///
/// `RecordId::UNASSIGNED` (zero) marks a record that has not been added yet;
/// the controller replaces it with a fresh id on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Placeholder id of a record that has not been inserted yet.
    pub const UNASSIGNED: RecordId = RecordId(0);

    /// True unless this is [`RecordId::UNASSIGNED`].
    pub fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value)
    }
}

/// Hands out monotonically increasing ids.
///
/// The sequence never goes backwards: observing an id advances it past that
/// id, so an id is never handed out twice, even after its record is removed.
///
/// Ids above [`IdSequence::MAX_RESERVED`] are never accepted from outside.
/// That keeps the remaining id space out of reach of arithmetic overflow.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    /// Highest externally supplied id the sequence will honour.
    pub const MAX_RESERVED: RecordId = RecordId(u64::MAX / 2);

    /// Creates a sequence starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh id.
    pub fn next_id(&mut self) -> RecordId {
        let id = RecordId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// True if `id` may be kept by a record: assigned and not above
    /// [`MAX_RESERVED`](Self::MAX_RESERVED).
    pub fn accepts(id: RecordId) -> bool {
        id.is_assigned() && id <= Self::MAX_RESERVED
    }

    /// Makes sure `id` will never be handed out later. Ids the sequence does
    /// not accept are ignored; returns whether `id` was accepted.
    pub fn observe(&mut self, id: RecordId) -> bool {
        if !Self::accepts(id) {
            return false;
        }
        if id.0 >= self.next {
            self.next = id.0 + 1;
        }
        true
    }

    /// Claims `id` for a new record. Only ids at or beyond
    /// [`peek`](Self::peek) can be claimed, so an id that was handed out or
    /// observed before, including one whose record was since removed, is
    /// refused.
    pub fn reserve(&mut self, id: RecordId) -> bool {
        id >= self.peek() && self.observe(id)
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> RecordId {
        RecordId(self.next)
    }
}

/// An item that can be held by a [`ListController`](crate::controller::ListController).
///
/// # Examples
///
/// ```
/// use admin_widgets::record::{Record, RecordId};
/// use std::borrow::Cow;
///
/// #[derive(Clone)]
/// struct Tag {
///     id: RecordId,
///     label: String,
///     group: String,
/// }
///
/// impl Record for Tag {
///     type Patch = String;
///
///     fn id(&self) -> RecordId {
///         self.id
///     }
///     fn set_id(&mut self, id: RecordId) {
///         self.id = id;
///     }
///     fn search_fields(&self) -> Vec<&str> {
///         vec![self.label.as_str()]
///     }
///     fn category(&self) -> Option<Cow<'_, str>> {
///         Some(Cow::Borrowed(&self.group))
///     }
///     fn apply_patch(&mut self, label: String) {
///         self.label = label;
///     }
/// }
/// ```
pub trait Record: Clone {
    /// Partial update merged by [`apply_patch`](Self::apply_patch).
    type Patch;

    /// The record's id.
    fn id(&self) -> RecordId;

    /// Overwrites the record's id. Only the controller calls this.
    fn set_id(&mut self, id: RecordId);

    /// Free-text fields matched case-insensitively by the search term.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of the categorical field matched exactly by the category filter.
    ///
    /// Records without a category never match a category constraint.
    fn category(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Merges a partial update into the record. Must not touch the id.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Checks required fields before a form submission is accepted.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// True if any search field contains `needle`, which must already be
    /// lowercase. An empty needle matches everything.
    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}
