//! State of the list view, its builders and the operations the host calls.

use super::keys::ListKeyMap;
use super::style::ListStyles;
use crate::controller::{CategoryFilter, ListController};
use crate::error::Result;
use crate::help;
use crate::livetail;
use crate::record::{Record, RecordId};
use crate::searchinput;
use crate::settings::Settings;
use crate::table::Tabular;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// A mutation waiting for a `y`/`n` answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    /// Delete the record with this id.
    DeleteRow(RecordId),
    /// Delete every record.
    ClearAll,
}

/// Line shown under the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Neutral feedback, e.g. "Record deleted".
    Info(String),
    /// Validation failure or other problem.
    Alert(String),
}

pub(super) type Generator<R> = Box<dyn FnMut() -> R + Send + Sync>;

/// A live tail feeding generated records into the list.
pub(super) struct Tail<R> {
    pub(super) model: livetail::Model,
    pub(super) generate: Generator<R>,
    pub(super) retention: usize,
}

/// Interactive list over a [`ListController`].
///
/// The view adds the parts of a list page the controller does not own: a
/// search box, category cycling, a selected row, confirmation prompts for
/// destructive actions, a status line and contextual help.
///
/// ```
/// use admin_widgets::list::Model;
/// use admin_widgets::records::{User, UserPlan, UserStatus};
///
/// let mut users = Model::new(vec![
///     User::new("Awin Nata", "awinnata@web.app", UserStatus::Active, UserPlan::Premium),
/// ])
/// .with_title("Users")
/// .with_categories(UserStatus::ALL.iter().map(|s| s.as_str()));
///
/// assert!(!users.submit_new(User::new("", "", UserStatus::Active, UserPlan::Basic)));
/// assert_eq!(users.controller().len(), 1);
/// ```
pub struct Model<R: Record> {
    pub(super) list: ListController<R>,
    /// Title shown above the table.
    pub title: String,
    pub(super) search: searchinput::Model,
    pub(super) categories: Vec<String>,
    pub(super) category_index: usize,
    pub(super) cursor: usize,
    pub(super) confirm: Option<Confirm>,
    pub(super) status: Option<Status>,
    pub(super) tail: Option<Tail<R>>,
    /// Key bindings.
    pub keymap: ListKeyMap,
    /// Styles.
    pub styles: ListStyles,
    /// Help renderer.
    pub help: help::Model,
}

impl<R: Record + Tabular> Model<R> {
    /// Creates a view over `items`.
    pub fn new(items: Vec<R>) -> Self {
        Self::from_controller(ListController::new(items))
    }

    /// Creates a view over an existing controller.
    pub fn from_controller(list: ListController<R>) -> Self {
        Self {
            list,
            title: String::new(),
            search: searchinput::new(),
            categories: Vec::new(),
            category_index: 0,
            cursor: 0,
            confirm: None,
            status: None,
            tail: None,
            keymap: ListKeyMap::default(),
            styles: ListStyles::default(),
            help: help::Model::new(),
        }
    }
}

impl<R: Record> Model<R> {
    /// Sets the title (builder pattern).
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the category options offered by `c`, after the implicit `all`
    /// (builder pattern).
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self.category_index = 0;
        self.keymap
            .cycle_category
            .set_enabled(!self.categories.is_empty());
        self
    }

    /// Sets the page size (builder pattern).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.list = self.list.with_page_size(page_size);
        self.clamp_cursor();
        self
    }

    /// Orders the rows with `cmp` (builder pattern). The stored order, and
    /// therefore exports, are unaffected.
    pub fn with_sort<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&R, &R) -> Ordering + Send + Sync + 'static,
    {
        self.list = self.list.with_sort(cmp);
        self
    }

    /// Adds a live tail (builder pattern). Every tick prepends a record from
    /// `generate` and drops records beyond `retention`. The tail starts
    /// stopped; `t` or [`start_live_tail`](Self::start_live_tail) starts it.
    pub fn with_live_tail<F>(mut self, retention: usize, generate: F) -> Self
    where
        F: FnMut() -> R + Send + Sync + 'static,
    {
        self.tail = Some(Tail {
            model: livetail::new(),
            generate: Box::new(generate),
            retention,
        });
        self.keymap.toggle_tail.set_enabled(true);
        self
    }

    /// Applies the page size, app name and theme of `settings` (builder
    /// pattern). The title becomes `"<app name> · <title>"`.
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self = self.with_page_size(settings.page_size);
        self.styles = ListStyles::for_theme(settings.theme);
        self.title = if self.title.is_empty() {
            settings.app_name.clone()
        } else {
            format!("{} · {}", settings.app_name, self.title)
        };
        self
    }

    /// Sets the help width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.help.width = width;
        self
    }

    /// The underlying controller.
    pub fn controller(&self) -> &ListController<R> {
        &self.list
    }

    /// Mutable access to the underlying controller. The row cursor is
    /// re-clamped on the next key press.
    pub fn controller_mut(&mut self) -> &mut ListController<R> {
        &mut self.list
    }

    /// Index of the selected row within the visible page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selected record, if the page has any rows.
    pub fn selected(&self) -> Option<&R> {
        self.list.visible_items().get(self.cursor).copied()
    }

    /// Pending confirmation, if any.
    pub fn pending_confirm(&self) -> Option<Confirm> {
        self.confirm
    }

    /// Current status line.
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Whether the search box has focus.
    pub fn searching(&self) -> bool {
        self.search.focused()
    }

    /// The active category option, `"all"` when none is selected.
    pub fn category(&self) -> &str {
        match self.category_index {
            0 => CategoryFilter::ALL,
            i => self
                .categories
                .get(i - 1)
                .map(String::as_str)
                .unwrap_or(CategoryFilter::ALL),
        }
    }

    /// Whether the live tail is running.
    pub fn live_tail_running(&self) -> bool {
        self.tail.as_ref().is_some_and(|t| t.model.running())
    }

    /// Validates `item` and adds it. On failure the collection is left
    /// untouched and the error becomes the status alert.
    pub fn submit_new(&mut self, item: R) -> bool {
        let result = self.list.try_add(item);
        self.report(result.map(|_| "Record added"))
    }

    /// Validates the patched record and stores it. On failure the record
    /// is left untouched and the error becomes the status alert.
    pub fn submit_edit(&mut self, id: RecordId, patch: R::Patch) -> bool {
        match self.list.try_update(id, patch) {
            Ok(true) => self.report(Ok("Record updated")),
            Ok(false) => {
                self.status = Some(Status::Alert(format!("No record with id {id}")));
                false
            }
            Err(err) => self.report(Err(err)),
        }
    }

    fn report(&mut self, result: Result<&str>) -> bool {
        match result {
            Ok(message) => {
                self.status = Some(Status::Info(message.to_string()));
                self.clamp_cursor();
                true
            }
            Err(err) => {
                warn!(error = %err, "form submission rejected");
                self.status = Some(Status::Alert(err.to_string()));
                false
            }
        }
    }

    /// Starts the live tail. Returns the command for its first tick, or
    /// `None` when the view has no tail.
    pub fn start_live_tail(&mut self) -> Option<bubbletea_rs::Cmd> {
        self.tail.as_mut().map(|t| t.model.start())
    }

    /// Stops the live tail for good, e.g. when the view is torn down. Ticks
    /// already scheduled are dropped on arrival.
    pub fn cancel_live_tail(&mut self) {
        if let Some(tail) = self.tail.as_mut() {
            tail.model.cancel();
        }
    }

    pub(super) fn toggle_live_tail(&mut self) -> Option<bubbletea_rs::Cmd> {
        let tail = self.tail.as_mut()?;
        let cmd = tail.model.toggle();
        let state = if tail.model.running() { "started" } else { "paused" };
        self.status = Some(Status::Info(format!("Live tail {state}")));
        cmd
    }

    /// Prepends one generated record and enforces the retention cap.
    pub(super) fn on_tail_tick(&mut self) {
        let Some(tail) = self.tail.as_mut() else {
            return;
        };
        let record = (tail.generate)();
        let retention = tail.retention;
        self.list.prepend(record);
        self.list.truncate(retention);
        self.clamp_cursor();
    }

    pub(super) fn cycle_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        self.category_index = (self.category_index + 1) % (self.categories.len() + 1);
        let category = self.category().to_string();
        self.list.set_category_filter(category.as_str());
        self.cursor = 0;
        self.sync_filter_keys();
        debug!(category = %category, "category cycled");
    }

    pub(super) fn apply_search(&mut self) {
        let term = self.search.value();
        self.list.set_search_term(&term);
        self.cursor = 0;
        self.sync_filter_keys();
    }

    pub(super) fn clear_filters(&mut self) {
        self.search.reset();
        self.category_index = 0;
        self.list.clear_filters();
        self.cursor = 0;
        self.sync_filter_keys();
    }

    pub(super) fn sync_filter_keys(&mut self) {
        let filtered = self.list.view_state().is_filtered();
        self.keymap.clear_filters.set_enabled(filtered);
    }

    pub(super) fn ask(&mut self, confirm: Confirm) {
        self.confirm = Some(confirm);
        self.status = None;
    }

    pub(super) fn resolve_confirm(&mut self, accepted: bool) {
        let Some(confirm) = self.confirm.take() else {
            return;
        };
        if !accepted {
            self.status = Some(Status::Info("Cancelled".to_string()));
            return;
        }
        match confirm {
            Confirm::DeleteRow(id) => {
                if self.list.remove(id).is_some() {
                    self.status = Some(Status::Info("Record deleted".to_string()));
                }
            }
            Confirm::ClearAll => {
                self.list.clear();
                self.status = Some(Status::Info("All records deleted".to_string()));
            }
        }
        self.clamp_cursor();
    }

    pub(super) fn move_cursor(&mut self, down: bool) {
        let rows = self.list.visible_items().len();
        if down {
            if self.cursor + 1 < rows {
                self.cursor += 1;
            }
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub(super) fn clamp_cursor(&mut self) {
        let rows = self.list.visible_items().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }
}
