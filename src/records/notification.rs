use crate::error::{self, Result};
use crate::export::Exportable;
use crate::record::{Record, RecordId};
use crate::table::{Column, Tabular};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Visual kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Completed operation.
    Success,
    /// Neutral news.
    Info,
    /// Needs attention.
    Warning,
    /// Something failed.
    Error,
}

impl NotificationKind {
    /// Display text.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Success",
            NotificationKind::Info => "Info",
            NotificationKind::Warning => "Warning",
            NotificationKind::Error => "Error",
        }
    }
}

/// An inbox notification. The category is its read state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Record id.
    pub id: RecordId,
    /// Kind.
    pub kind: NotificationKind,
    /// Headline.
    pub message: String,
    /// Longer text.
    pub detail: String,
    /// When, as displayed.
    pub time: String,
    /// Whether it has been read.
    pub read: bool,
}

/// Partial update of a [`Notification`].
#[derive(Debug, Clone, Default)]
pub struct NotificationPatch {
    /// New read state.
    pub read: Option<bool>,
    /// New headline.
    pub message: Option<String>,
    /// New detail.
    pub detail: Option<String>,
}

impl NotificationPatch {
    /// Patch that marks a notification read.
    pub fn mark_read() -> Self {
        Self {
            read: Some(true),
            ..Default::default()
        }
    }
}

impl Notification {
    /// Creates an unread notification.
    pub fn new(kind: NotificationKind, message: &str, detail: &str, time: &str) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            kind,
            message: message.to_string(),
            detail: detail.to_string(),
            time: time.to_string(),
            read: false,
        }
    }

    /// Category text for a read state.
    pub fn state_str(read: bool) -> &'static str {
        if read {
            "read"
        } else {
            "unread"
        }
    }
}

impl Record for Notification {
    type Patch = NotificationPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.message.as_str(), self.detail.as_str()]
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(Notification::state_str(self.read)))
    }

    fn apply_patch(&mut self, patch: NotificationPatch) {
        if let Some(read) = patch.read {
            self.read = read;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(detail) = patch.detail {
            self.detail = detail;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("message", &self.message)
    }
}

impl Exportable for Notification {
    const FIELDS: &'static [&'static str] = &["id", "kind", "message", "detail", "time", "read"];
}

impl Tabular for Notification {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("").with_width(1),
            Column::new("Kind").with_width(7),
            Column::new("Message"),
            Column::new("Detail"),
            Column::new("Time"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            if self.read { " " } else { "●" }.to_string(),
            self.kind.as_str().to_string(),
            self.message.clone(),
            self.detail.clone(),
            self.time.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ListController;

    fn seed() -> Vec<Notification> {
        vec![
            Notification::new(NotificationKind::Success, "Backup complete", "Nightly backup finished", "08:00"),
            Notification::new(NotificationKind::Warning, "Disk almost full", "91% used on /var", "09:12"),
            Notification::new(NotificationKind::Error, "Payment failed", "TRX-003 was declined", "09:40"),
        ]
    }

    #[test]
    fn test_mark_all_read() {
        let mut list = ListController::new(seed());
        assert_eq!(list.count_where(|n| !n.read), 3);
        list.update_all(|n| n.read = true);
        list.set_category_filter("unread");
        assert_eq!(list.filtered_count(), 0);
        assert_eq!(list.total_pages(), 1);
    }

    #[test]
    fn test_mark_one_read() {
        let mut list = ListController::new(seed());
        let id = list.items()[1].id;
        assert!(list.update(id, NotificationPatch::mark_read()));
        assert_eq!(list.count_by_category().get("read"), Some(&1));
    }

    #[test]
    fn test_search_detail() {
        let mut list = ListController::new(seed());
        list.set_search_term("trx-003");
        assert_eq!(list.visible_items()[0].message, "Payment failed");
    }
}
