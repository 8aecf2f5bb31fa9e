use crate::error::{self, Result};
use crate::export::Exportable;
use crate::record::{Record, RecordId};
use crate::table::{Column, Tabular};
use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How many entries the live log keeps; older entries are dropped from the tail.
pub const LOG_RETENTION: usize = 50;

/// Severity of a log entry. Serialized in lowercase, which is also the
/// category filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Informational.
    Info,
    /// Something looks off.
    Warning,
    /// Something failed.
    Error,
}

impl LogLevel {
    /// Every level, in select-box order.
    pub const ALL: [LogLevel; 3] = [LogLevel::Info, LogLevel::Warning, LogLevel::Error];

    /// Category text.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

/// A server log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Record id.
    pub id: RecordId,
    /// Log text.
    pub message: String,
    /// Timestamp as displayed.
    pub time: String,
    /// Severity.
    pub level: LogLevel,
}

/// Partial update of a [`LogEntry`].
#[derive(Debug, Clone, Default)]
pub struct LogPatch {
    /// New message.
    pub message: Option<String>,
    /// New level.
    pub level: Option<LogLevel>,
}

impl LogEntry {
    /// Creates an entry without an id.
    pub fn new(message: &str, time: &str, level: LogLevel) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            message: message.to_string(),
            time: time.to_string(),
            level,
        }
    }

    /// A synthetic entry for the live tail, stamped with the current local
    /// time and a random level.
    pub fn synthetic<G: Rng + ?Sized>(rng: &mut G) -> Self {
        let level = LogLevel::ALL[rng.random_range(0..LogLevel::ALL.len())];
        let n: u32 = rng.random_range(1..=1000);
        let message = match level {
            LogLevel::Info => format!("Request #{n} served"),
            LogLevel::Warning => format!("Slow response on request #{n}"),
            LogLevel::Error => format!("Request #{n} failed"),
        };
        let time = Local::now().format("%H:%M:%S").to_string();
        Self::new(&message, &time, level)
    }
}

impl Record for LogEntry {
    type Patch = LogPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.message.as_str()]
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.level.as_str()))
    }

    fn apply_patch(&mut self, patch: LogPatch) {
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("message", &self.message)
    }
}

impl Exportable for LogEntry {
    const FIELDS: &'static [&'static str] = &["id", "message", "time", "level"];
}

impl Tabular for LogEntry {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Time").with_width(16),
            Column::new("Level").with_width(7),
            Column::new("Message"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.time.clone(),
            self.level.as_str().to_uppercase(),
            self.message.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ListController;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tail_keeps_newest() {
        let mut list: ListController<LogEntry> = ListController::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..LOG_RETENTION + 5 {
            list.prepend(LogEntry::synthetic(&mut rng));
            list.truncate(LOG_RETENTION);
        }
        assert_eq!(list.len(), LOG_RETENTION);
        // Newest first: ids descend from the last one issued.
        let newest = list.items()[0].id;
        assert_eq!(newest.0, (LOG_RETENTION + 5) as u64);
        assert!(list.items().windows(2).all(|w| w[0].id > w[1].id));
    }

    #[test]
    fn test_level_filter() {
        let mut list = ListController::new(vec![
            LogEntry::new("Server started", "10:00", LogLevel::Info),
            LogEntry::new("Disk 91% full", "10:01", LogLevel::Warning),
            LogEntry::new("DB connection lost", "10:02", LogLevel::Error),
        ]);
        list.set_category_filter("error");
        assert_eq!(list.visible_items()[0].message, "DB connection lost");
        list.set_category_filter("ERROR");
        assert_eq!(list.filtered_count(), 0);
    }

    #[test]
    fn test_synthetic_entry_is_valid() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let entry = LogEntry::synthetic(&mut rng);
            assert!(entry.validate().is_ok());
            assert_eq!(entry.time.len(), 8);
        }
    }
}
