//! Interactive list view for bubbletea-rs applications.
//!
//! [`Model`] wraps a [`ListController`](crate::controller::ListController)
//! and renders it as a dashboard list page:
//!
//! ```text
//!  Users  • live
//!
//!   / awi█            category: Active
//!   Name      | Email            | Status | Plan
//!   ----------+------------------+--------+--------
//! > Awin Nata | awinnata@web.app | Active | Premium
//!   Page 1/1 • 1 of 3 records
//!   Record added
//!
//!   ↑/k up • ↓/j down • ←/h prev page • →/l next page • / search • …
//! ```
//!
//! ### Modes
//! - **Browsing**: row, page and filter keys act on the list.
//! - **Searching** (after `/`): keys edit the search box and the list filters
//!   live; `enter` keeps the term, `esc` drops it.
//! - **Confirming** (after `d` or `D`): only `y` and `n`/`esc` are accepted.
//!
//! ### Help Integration
//! The view implements [`help::KeyMap`], so the help line always shows the
//! bindings of the current mode.

pub mod keys;
pub mod style;

mod model;
mod rendering;


pub use keys::ListKeyMap;
pub use model::{Confirm, Model, Status};
pub use style::ListStyles;

use crate::record::Record;
use crate::table::Tabular;
use crate::{help, key};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use tracing::trace;

impl<R: Record> help::KeyMap for Model<R> {
    fn short_help(&self) -> Vec<&key::Binding> {
        let km = &self.keymap;
        if self.confirm.is_some() {
            return vec![&km.confirm_yes, &km.confirm_no];
        }
        if self.search.focused() {
            return vec![&km.accept_search, &km.cancel_search];
        }
        vec![
            &km.cursor_up,
            &km.cursor_down,
            &km.prev_page,
            &km.next_page,
            &km.search,
            &km.delete,
            &km.toggle_help,
            &km.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let km = &self.keymap;
        vec![
            vec![&km.cursor_up, &km.cursor_down, &km.prev_page, &km.next_page],
            vec![&km.search, &km.cycle_category, &km.clear_filters],
            vec![&km.delete, &km.clear_all, &km.toggle_tail],
            vec![&km.toggle_help, &km.quit, &km.force_quit],
        ]
    }
}

impl<R: Record + Tabular> Model<R> {
    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        // The controller may have been mutated directly since the last key.
        self.clamp_cursor();

        if self.keymap.force_quit.matches(key_msg) {
            self.cancel_live_tail();
            return Some(bubbletea_rs::quit());
        }

        if self.confirm.is_some() {
            if self.keymap.confirm_yes.matches(key_msg) {
                self.resolve_confirm(true);
            } else if self.keymap.confirm_no.matches(key_msg) {
                self.resolve_confirm(false);
            }
            return None;
        }

        if self.search.focused() {
            if self.keymap.accept_search.matches(key_msg) {
                self.search.blur();
            } else if self.keymap.cancel_search.matches(key_msg) {
                self.search.reset();
                self.search.blur();
                self.apply_search();
            } else if self.search.update(key_msg) {
                self.apply_search();
            }
            return None;
        }

        let km = &self.keymap;
        if km.quit.matches(key_msg) {
            self.cancel_live_tail();
            return Some(bubbletea_rs::quit());
        } else if km.cursor_up.matches(key_msg) {
            self.move_cursor(false);
        } else if km.cursor_down.matches(key_msg) {
            self.move_cursor(true);
        } else if km.prev_page.matches(key_msg) {
            self.list.prev_page();
            self.cursor = 0;
            trace!(page = self.list.page_index(), "page changed");
        } else if km.next_page.matches(key_msg) {
            self.list.next_page();
            self.cursor = 0;
            trace!(page = self.list.page_index(), "page changed");
        } else if km.search.matches(key_msg) {
            self.status = None;
            self.search.focus();
        } else if km.clear_filters.matches(key_msg) {
            self.clear_filters();
        } else if km.cycle_category.matches(key_msg) {
            self.cycle_category();
        } else if km.delete.matches(key_msg) {
            if let Some(id) = self.selected().map(|r| r.id()) {
                self.ask(Confirm::DeleteRow(id));
            }
        } else if km.clear_all.matches(key_msg) {
            if !self.list.is_empty() {
                self.ask(Confirm::ClearAll);
            }
        } else if km.toggle_tail.matches(key_msg) {
            return self.toggle_live_tail();
        } else if km.toggle_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
        }
        None
    }
}

impl<R> BubbleTeaModel for Model<R>
where
    R: Record + Tabular + Send + Sync + 'static,
{
    /// An empty, untitled list.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tail) = self.tail.as_mut() {
            let update = tail.model.update(&msg);
            if update.tick {
                self.on_tail_tick();
            }
            if update.tick || update.cmd.is_some() {
                return update.cmd;
            }
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        self.handle_key(key_msg)
    }

    fn view(&self) -> String {
        let sections = [
            self.view_title(),
            self.view_filters(),
            self.view_rows(),
            self.view_pagination(),
            self.view_status(),
            self.view_help(),
        ];
        sections
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
