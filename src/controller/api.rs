//! Mutations: add, update, remove, clear, plus the summary counters the
//! dashboard cards are built from.
//!
//! Unknown ids are silently ignored. The `try_*` variants run the record's
//! form validation first and leave the collection untouched on failure.

use super::ListController;
use crate::error::Result;
use crate::record::{Record, RecordId};
use std::collections::BTreeMap;
use tracing::debug;

impl<R: Record> ListController<R> {
    /// Keeps `item`'s id when it has never been used in this collection,
    /// otherwise gives it a fresh one. Ids of removed records count as used.
    fn admit(&mut self, item: &mut R) -> RecordId {
        let id = item.id();
        if self.ids.reserve(id) {
            return id;
        }
        let fresh = self.ids.next_id();
        if id.is_assigned() {
            debug!(requested = %id, replacement = %fresh, "record id already used, replaced");
        }
        item.set_id(fresh);
        fresh
    }

    /// Appends a record and returns its id.
    pub fn add(&mut self, mut item: R) -> RecordId {
        let id = self.admit(&mut item);
        self.items.push(item);
        self.sync_pagination();
        debug!(%id, len = self.items.len(), "record added");
        id
    }

    /// Validates and appends a record, as a form submission does.
    pub fn try_add(&mut self, item: R) -> Result<RecordId> {
        item.validate()?;
        Ok(self.add(item))
    }

    /// Inserts a record at the front of the collection and returns its id.
    pub fn prepend(&mut self, mut item: R) -> RecordId {
        let id = self.admit(&mut item);
        self.items.insert(0, item);
        self.sync_pagination();
        debug!(%id, len = self.items.len(), "record prepended");
        id
    }

    /// Validates and prepends a record.
    pub fn try_prepend(&mut self, item: R) -> Result<RecordId> {
        item.validate()?;
        Ok(self.prepend(item))
    }

    /// Keeps only the first `max_len` records.
    pub fn truncate(&mut self, max_len: usize) {
        if self.items.len() > max_len {
            self.items.truncate(max_len);
            self.sync_pagination();
            debug!(len = self.items.len(), "collection truncated");
        }
    }

    /// Merges `patch` into the record with this id, keeping its id and
    /// position. Returns false if there is no such record.
    pub fn update(&mut self, id: RecordId, patch: R::Patch) -> bool {
        self.update_with(id, |item| item.apply_patch(patch))
    }

    /// Like [`update`](Self::update) but rejects patches that leave the
    /// record invalid. On error the record is unchanged.
    pub fn try_update(&mut self, id: RecordId, patch: R::Patch) -> Result<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        let mut edited = self.items[index].clone();
        edited.apply_patch(patch);
        edited.set_id(id);
        edited.validate()?;
        self.items[index] = edited;
        self.sync_pagination();
        debug!(%id, "record updated");
        Ok(true)
    }

    /// Edits the record with this id in place. The id is restored after
    /// `edit` runs. Returns false if there is no such record.
    pub fn update_with<F>(&mut self, id: RecordId, edit: F) -> bool
    where
        F: FnOnce(&mut R),
    {
        let Some(index) = self.position(id) else {
            return false;
        };
        let item = &mut self.items[index];
        edit(item);
        item.set_id(id);
        self.sync_pagination();
        debug!(%id, "record updated");
        true
    }

    /// Applies `edit` to every record, e.g. "mark all as read".
    pub fn update_all<F>(&mut self, mut edit: F)
    where
        F: FnMut(&mut R),
    {
        for item in self.items.iter_mut() {
            let id = item.id();
            edit(item);
            item.set_id(id);
        }
        self.sync_pagination();
        debug!(len = self.items.len(), "all records updated");
    }

    /// Removes the record with this id, keeping the order of the others.
    ///
    /// The page index is clamped if the current page no longer exists.
    pub fn remove(&mut self, id: RecordId) -> Option<R> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        self.sync_pagination();
        debug!(%id, len = self.items.len(), page = self.page_index(), "record removed");
        Some(removed)
    }

    /// Removes every record and returns to page 1.
    pub fn clear(&mut self) {
        self.items.clear();
        self.paginator.reset();
        self.sync_pagination();
        debug!("collection cleared");
    }

    /// Number of records (ignoring filters) satisfying `pred`.
    pub fn count_where<P>(&self, pred: P) -> usize
    where
        P: Fn(&R) -> bool,
    {
        self.items.iter().filter(|&item| pred(item)).count()
    }

    /// Number of records per category value, ignoring filters.
    /// Records without a category are not counted.
    pub fn count_by_category(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            if let Some(category) = item.category() {
                *counts.entry(category.into_owned()).or_insert(0) += 1;
            }
        }
        counts
    }
}
