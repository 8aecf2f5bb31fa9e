//! View sections of the list view.

use super::model::{Confirm, Model, Status};
use super::style::BULLET;
use crate::record::Record;
use crate::table::{self, Tabular};

impl<R: Record + Tabular> Model<R> {
    pub(super) fn view_title(&self) -> String {
        if self.title.is_empty() && !self.live_tail_running() {
            return String::new();
        }
        let mut line = String::new();
        if !self.title.is_empty() {
            line.push_str(&self.styles.title.render(&self.title));
        }
        if self.live_tail_running() {
            line.push_str(&self.styles.tail_badge.render(&format!(" {BULLET} live")));
        }
        self.styles.title_bar.render(&line)
    }

    pub(super) fn view_filters(&self) -> String {
        let mut line = format!("  {}", self.search.view());
        if !self.categories.is_empty() {
            line.push_str("    ");
            line.push_str(&self.styles.category_label.render("category: "));
            line.push_str(&self.styles.category_value.render(self.category()));
        }
        line
    }

    pub(super) fn view_rows(&self) -> String {
        let visible = self.list.visible_items();
        if visible.is_empty() {
            let text = if self.list.is_empty() {
                "No records."
            } else {
                "No records match the current filters."
            };
            return format!("  {}", self.styles.no_items.render(text));
        }
        table::Model::for_records::<R>()
            .with_records(visible)
            .with_selected(self.cursor)
            .view()
    }

    pub(super) fn view_pagination(&self) -> String {
        let state = self.list.view_state();
        let mut text = format!("Page {}/{}", state.page_index, state.total_pages);
        if state.is_filtered() {
            text.push_str(&format!(
                " {BULLET} {} of {} records",
                state.filtered_count, state.total_count
            ));
        } else {
            text.push_str(&format!(" {BULLET} {} records", state.total_count));
        }
        self.styles.pagination.render(&text)
    }

    pub(super) fn view_status(&self) -> String {
        if let Some(confirm) = self.confirm {
            let question = match confirm {
                Confirm::DeleteRow(id) => {
                    let label = self
                        .list
                        .get(id)
                        .and_then(|r| r.cells().into_iter().next())
                        .unwrap_or_else(|| id.to_string());
                    format!("Delete \"{label}\"? (y/n)")
                }
                Confirm::ClearAll => {
                    format!("Delete all {} records? (y/n)", self.list.len())
                }
            };
            return format!("  {}", self.styles.confirm.render(&question));
        }
        match &self.status {
            Some(Status::Info(text)) => format!("  {}", self.styles.status_info.render(text)),
            Some(Status::Alert(text)) => format!("  {}", self.styles.status_alert.render(text)),
            None => String::new(),
        }
    }

    pub(super) fn view_help(&self) -> String {
        let help = self.help.view(self);
        if help.is_empty() {
            return help;
        }
        self.styles.help.render(&help)
    }
}
