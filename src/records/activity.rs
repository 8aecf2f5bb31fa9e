use crate::error::{self, Result};
use crate::export::Exportable;
use crate::record::{Record, RecordId};
use crate::table::{Column, Tabular};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Area of the dashboard an activity happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    /// Sign-in, sign-out and credential changes.
    Auth,
    /// Configuration changes.
    Settings,
    /// Data edits and exports.
    Data,
    /// Account administration.
    User,
}

impl ActivityCategory {
    /// Every category, in select-box order.
    pub const ALL: [ActivityCategory; 4] = [
        ActivityCategory::Auth,
        ActivityCategory::Settings,
        ActivityCategory::Data,
        ActivityCategory::User,
    ];

    /// Category text.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Auth => "Auth",
            ActivityCategory::Settings => "Settings",
            ActivityCategory::Data => "Data",
            ActivityCategory::User => "User",
        }
    }
}

/// An entry of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Record id.
    pub id: RecordId,
    /// Who did it.
    pub user: String,
    /// What was done.
    pub action: String,
    /// Area.
    pub category: ActivityCategory,
    /// When, as displayed.
    pub time: String,
}

/// Partial update of an [`Activity`].
#[derive(Debug, Clone, Default)]
pub struct ActivityPatch {
    /// New action text.
    pub action: Option<String>,
    /// New category.
    pub category: Option<ActivityCategory>,
}

impl Activity {
    /// Creates an activity stamped with the current local time.
    pub fn new(user: &str, action: &str, category: ActivityCategory) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            user: user.to_string(),
            action: action.to_string(),
            category,
            time: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        }
    }

    /// Replaces the timestamp.
    pub fn at(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }
}

impl Record for Activity {
    type Patch = ActivityPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.action.as_str(), self.user.as_str()]
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.category.as_str()))
    }

    fn apply_patch(&mut self, patch: ActivityPatch) {
        if let Some(action) = patch.action {
            self.action = action;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("user", &self.user)?;
        error::require("action", &self.action)
    }
}

impl Exportable for Activity {
    const FIELDS: &'static [&'static str] = &["id", "user", "action", "category", "time"];
}

impl Tabular for Activity {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Time").with_width(16),
            Column::new("User"),
            Column::new("Action"),
            Column::new("Category"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.time.clone(),
            self.user.clone(),
            self.action.clone(),
            self.category.as_str().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ListController;

    #[test]
    fn test_feed_filters() {
        let mut list = ListController::new(vec![
            Activity::new("Awin", "Signed in", ActivityCategory::Auth).at("2025-07-20 10:00"),
            Activity::new("Rina", "Changed theme", ActivityCategory::Settings).at("2025-07-20 10:05"),
            Activity::new("Budi", "Failed login", ActivityCategory::Auth).at("2025-07-20 10:07"),
        ]);
        list.set_category_filter("Auth");
        assert_eq!(list.filtered_count(), 2);
        list.set_search_term("rina");
        assert_eq!(list.filtered_count(), 0);
        list.set_category_filter("all");
        assert_eq!(list.visible_items()[0].action, "Changed theme");
    }

    #[test]
    fn test_new_is_timestamped() {
        let activity = Activity::new("Awin", "Exported users", ActivityCategory::Data);
        assert_eq!(activity.time.len(), "2025-07-20 10:00".len());
    }
}
