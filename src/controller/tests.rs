//! Tests for the list controller.

use super::*;
use crate::error::{self, Result};
use crate::record::{Record, RecordId};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: RecordId,
    name: String,
    group: String,
}

#[derive(Debug, Default)]
struct EntryPatch {
    name: Option<String>,
    group: Option<String>,
}

impl Entry {
    fn new(name: &str, group: &str) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            name: name.to_string(),
            group: group.to_string(),
        }
    }

    fn with_id(id: u64, name: &str, group: &str) -> Self {
        Self {
            id: RecordId(id),
            ..Self::new(name, group)
        }
    }
}

impl Record for Entry {
    type Patch = EntryPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.group.as_str()))
    }

    fn apply_patch(&mut self, patch: EntryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(group) = patch.group {
            self.group = group;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("name", &self.name)
    }
}

fn numbered(count: usize) -> Vec<Entry> {
    (1..=count)
        .map(|i| Entry::new(&format!("entry {i}"), if i % 2 == 0 { "even" } else { "odd" }))
        .collect()
}

fn names(items: &[&Entry]) -> Vec<String> {
    items.iter().map(|e| e.name.clone()).collect()
}

#[test]
fn test_empty_collection() {
    let list: ListController<Entry> = ListController::new(vec![]);
    assert!(list.visible_items().is_empty());
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.page_index(), 1);
    assert!(list.is_empty());
}

#[test]
fn test_category_filter_scenario() {
    let mut list = ListController::new(vec![
        Entry::new("Awin", "Auth"),
        Entry::new("Rina", "Settings"),
        Entry::new("Budi", "Auth"),
        Entry::new("Tono", "Data"),
        Entry::new("Awin", "User"),
    ])
    .with_page_size(5);

    list.set_category_filter("Auth");
    let visible = list.visible_items();
    assert_eq!(names(&visible), vec!["Awin", "Budi"]);
    assert_eq!(list.total_pages(), 1);

    list.set_category_filter("all");
    assert_eq!(list.visible_items().len(), 5);
}

#[test]
fn test_category_filter_is_exact() {
    let mut list = ListController::new(vec![Entry::new("a", "Auth"), Entry::new("b", "Authz")]);
    list.set_category_filter("Auth");
    assert_eq!(list.filtered_count(), 1);
    list.set_category_filter("auth");
    assert_eq!(list.filtered_count(), 0);
}

#[test]
fn test_search_is_trimmed_and_case_insensitive() {
    let mut list = ListController::new(vec![
        Entry::new("Awin Nata", "a"),
        Entry::new("Anna Smith", "a"),
        Entry::new("Michael Lee", "b"),
    ]);
    list.set_search_term("  NATA ");
    assert_eq!(list.search_term(), "NATA");
    assert_eq!(names(&list.visible_items()), vec!["Awin Nata"]);

    list.set_search_term("");
    assert_eq!(list.filtered_count(), 3);
}

#[test]
fn test_search_and_category_combine() {
    let mut list = ListController::new(numbered(10));
    list.set_search_term("entry 1");
    // "entry 1" and "entry 10"
    assert_eq!(list.filtered_count(), 2);
    list.set_category_filter("even");
    assert_eq!(names(&list.visible_items()), vec!["entry 10"]);
}

#[test]
fn test_changing_filters_resets_page() {
    let mut list = ListController::new(numbered(12)).with_page_size(5);
    assert!(list.set_page(3));
    list.set_search_term("entry");
    assert_eq!(list.page_index(), 1);

    assert!(list.set_page(2));
    list.set_category_filter("odd");
    assert_eq!(list.page_index(), 1);
}

#[test]
fn test_pages_slice_filtered_items() {
    let mut list = ListController::new(numbered(12)).with_page_size(5);
    assert_eq!(list.total_pages(), 3);
    list.set_page(3);
    assert_eq!(names(&list.visible_items()), vec!["entry 11", "entry 12"]);
    list.prev_page();
    assert_eq!(list.visible_items().len(), 5);
    assert_eq!(list.visible_items()[0].name, "entry 6");
}

#[test]
fn test_set_page_out_of_range_keeps_page() {
    let mut list = ListController::new(numbered(12)).with_page_size(5);
    assert!(list.set_page(2));
    assert!(!list.set_page(0));
    assert!(!list.set_page(4));
    assert!(!list.set_page(usize::MAX));
    assert_eq!(list.page_index(), 2);
}

#[test]
fn test_next_page_stops_at_last() {
    let mut list = ListController::new(numbered(6)).with_page_size(5);
    list.next_page();
    list.next_page();
    assert_eq!(list.page_index(), 2);
}

#[test]
fn test_removing_only_record_on_last_page_clamps() {
    let mut list = ListController::new(numbered(6)).with_page_size(5);
    list.set_page(2);
    let last = list.visible_items()[0].id();

    assert!(list.remove(last).is_some());
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.page_index(), 1);
    assert_eq!(list.visible_items().len(), 5);
}

#[test]
fn test_update_moving_record_out_of_filter_clamps() {
    let mut list = ListController::new(numbered(6)).with_page_size(1);
    list.set_category_filter("odd");
    list.set_page(3);
    let id = list.visible_items()[0].id();

    assert!(list.update(
        id,
        EntryPatch {
            group: Some("even".to_string()),
            ..Default::default()
        }
    ));
    assert_eq!(list.total_pages(), 2);
    assert_eq!(list.page_index(), 2);
}

#[test]
fn test_add_then_remove_leaves_no_trace() {
    let mut list = ListController::new(numbered(3));
    let before = list.len();

    let id = list.add(Entry::new("X", "odd"));
    assert_eq!(list.len(), before + 1);
    assert!(list.remove(id).is_some());
    assert_eq!(list.len(), before);

    assert!(!list.update(id, EntryPatch::default()));
    assert!(list.remove(id).is_none());
    assert!(!list.contains(id));
    assert_eq!(list.len(), before);
}

#[test]
fn test_ids_are_never_reused() {
    let mut list: ListController<Entry> = ListController::default();
    let first = list.add(Entry::new("a", "x"));
    let second = list.add(Entry::new("b", "x"));
    list.remove(second);
    let third = list.add(Entry::new("c", "x"));
    assert_ne!(third, second);
    assert_ne!(third, first);
    assert!(third > second);
}

#[test]
fn test_add_keeps_free_explicit_id_and_replaces_taken_one() {
    let mut list = ListController::new(vec![Entry::with_id(5, "a", "x")]);
    let kept = list.add(Entry::with_id(9, "b", "x"));
    assert_eq!(kept, RecordId(9));

    let replaced = list.add(Entry::with_id(5, "c", "x"));
    assert_eq!(replaced, RecordId(10));
    assert_eq!(list.get(RecordId(5)).map(|e| e.name.as_str()), Some("a"));
}

#[test]
fn test_removed_record_added_back_gets_new_id() {
    let mut list = ListController::new(numbered(2));
    let id = list.add(Entry::new("c", "x"));
    let removed = list.remove(id).unwrap();
    assert_eq!(removed.id(), id);

    let again = list.add(removed.clone());
    assert_ne!(again, id);
    assert!(!list.contains(id));
    assert_eq!(list.get(again).map(|e| e.name.as_str()), Some("c"));

    // Ids below the sequence head are refused even if nothing holds them.
    let prepended = list.prepend(removed);
    assert!(prepended > again);
}

#[test]
fn test_huge_ids_are_replaced() {
    let mut list = ListController::new(vec![
        Entry::with_id(u64::MAX, "a", "x"),
        Entry::with_id(2, "b", "x"),
    ]);
    assert_eq!(list.items()[0].id(), RecordId(3));

    let added = list.add(Entry::with_id(u64::MAX, "c", "x"));
    assert_eq!(added, RecordId(4));
    let next = list.add(Entry::new("d", "x"));
    assert_eq!(next, RecordId(5));
    assert_eq!(list.len(), 4);
}

#[test]
fn test_seed_ids_are_repaired() {
    let list = ListController::new(vec![
        Entry::with_id(3, "a", "x"),
        Entry::with_id(3, "b", "x"),
        Entry::new("c", "x"),
    ]);
    let ids: Vec<RecordId> = list.items().iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec![RecordId(3), RecordId(4), RecordId(5)]);
}

#[test]
fn test_update_preserves_id_and_position() {
    let mut list = ListController::new(numbered(3));
    let id = list.items()[1].id();
    assert!(list.update(
        id,
        EntryPatch {
            name: Some("renamed".to_string()),
            ..Default::default()
        }
    ));
    assert_eq!(list.items()[1].name, "renamed");
    assert_eq!(list.items()[1].id(), id);
}

#[test]
fn test_update_with_restores_id() {
    let mut list = ListController::new(numbered(2));
    let id = list.items()[0].id();
    assert!(list.update_with(id, |e| e.id = RecordId(999)));
    assert_eq!(list.items()[0].id(), id);
}

#[test]
fn test_try_add_rejects_invalid_record() {
    let mut list = ListController::new(numbered(2));
    let err = list.try_add(Entry::new("  ", "x")).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(list.len(), 2);
}

#[test]
fn test_try_update_rejects_invalid_patch() {
    let mut list = ListController::new(numbered(2));
    let id = list.items()[0].id();
    let result = list.try_update(
        id,
        EntryPatch {
            name: Some(String::new()),
            ..Default::default()
        },
    );
    assert!(result.is_err());
    assert_eq!(list.items()[0].name, "entry 1");

    assert!(!list.try_update(RecordId(404), EntryPatch::default()).unwrap());
}

#[test]
fn test_prepend_and_truncate() {
    let mut list = ListController::new(numbered(3));
    let id = list.prepend(Entry::new("newest", "x"));
    assert_eq!(list.items()[0].id(), id);
    list.truncate(2);
    assert_eq!(names(&list.filtered_items()), vec!["newest", "entry 1"]);
}

#[test]
fn test_clear_resets_everything() {
    let mut list = ListController::new(numbered(12)).with_page_size(5);
    list.set_page(3);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.page_index(), 1);
    assert_eq!(list.total_pages(), 1);
}

#[test]
fn test_sort_orders_view_only() {
    let mut list = ListController::new(vec![
        Entry::new("b", "x"),
        Entry::new("c", "x"),
        Entry::new("a", "x"),
    ])
    .with_sort(|a, b| a.name.cmp(&b.name));
    list.set_search_term("");
    assert_eq!(names(&list.visible_items()), vec!["a", "b", "c"]);
    let stored: Vec<&str> = list.items().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(stored, vec!["b", "c", "a"]);
}

#[test]
fn test_summary_counts() {
    let mut list = ListController::new(numbered(5));
    list.set_search_term("nothing matches");
    let counts = list.count_by_category();
    assert_eq!(counts.get("odd"), Some(&3));
    assert_eq!(counts.get("even"), Some(&2));
    assert_eq!(list.count_where(|e| e.name.ends_with('5')), 1);
}

#[test]
fn test_view_state_snapshot() {
    let mut list = ListController::new(numbered(7)).with_page_size(3);
    list.set_category_filter("odd");
    let state = list.view_state();
    assert_eq!(state.filtered_count, 4);
    assert_eq!(state.total_count, 7);
    assert_eq!(state.total_pages, 2);
    assert_eq!(state.page_index, 1);
    assert!(state.is_filtered());
}
