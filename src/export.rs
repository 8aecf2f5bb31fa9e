//! CSV and JSON export of a record collection.
//!
//! Exports always cover the whole collection in collection order, not the
//! filtered page. The crate only builds the text; saving it is left to the
//! host.
//!
//! ```
//! use admin_widgets::export::{self, ExportFormat};
//! use admin_widgets::records::{LogEntry, LogLevel};
//!
//! let logs = vec![LogEntry::new("Server started", "2025-07-20 10:00", LogLevel::Info)];
//! let out = export::export(&logs, ExportFormat::Csv, "server-logs").unwrap();
//! assert_eq!(out.filename, "server-logs.csv");
//! assert!(out.content.starts_with("\"id\",\"message\",\"time\",\"level\"\n"));
//! ```

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// A record type that can be exported.
///
/// `FIELDS` lists the serialized field names in declaration order; it is
/// the CSV header and must match the serde field names.
pub trait Exportable: Serialize + DeserializeOwned {
    /// Serialized field names, in order.
    const FIELDS: &'static [&'static str];
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, every field quoted, header row first.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// MIME type of the output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Export text plus what the host needs to offer it as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name, `<basename>.<extension>`.
    pub filename: String,
    /// MIME type.
    pub mime_type: &'static str,
    /// The exported text.
    pub content: String,
    /// Number of records exported.
    pub row_count: usize,
}

/// Serializes records as CSV: a header row of field names, then one row per
/// record, every field quoted.
pub fn to_csv<T: Exportable>(records: &[T]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(T::FIELDS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    // The csv writer only ever emits the UTF-8 it was given.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Serializes records as a pretty-printed JSON array.
pub fn to_json<T: Serialize>(records: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parses a JSON array produced by [`to_json`].
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(text)?)
}

/// Exports `records` in `format`, naming the result after `basename`.
pub fn export<T: Exportable>(records: &[T], format: ExportFormat, basename: &str) -> Result<Export> {
    let content = match format {
        ExportFormat::Csv => to_csv(records)?,
        ExportFormat::Json => to_json(records)?,
    };
    debug!(
        format = format.extension(),
        rows = records.len(),
        bytes = content.len(),
        "collection exported"
    );
    Ok(Export {
        filename: format!("{}.{}", basename, format.extension()),
        mime_type: format.mime_type(),
        content,
        row_count: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordId;
    use crate::records::{Feedback, LogEntry, LogLevel, User, UserPlan, UserStatus};

    fn users() -> Vec<User> {
        let mut awin = User::new("Awin Nata", "awinnata@web.app", UserStatus::Active, UserPlan::Premium);
        awin.id = RecordId(1);
        let mut anna = User::new("Anna \"Annie\" Smith", "anna@example.com", UserStatus::Pending, UserPlan::Standard);
        anna.id = RecordId(2);
        vec![awin, anna]
    }

    #[test]
    fn test_csv_quotes_every_field() {
        let csv = to_csv(&users()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], r#""id","name","email","status","plan""#);
        assert_eq!(lines[1], r#""1","Awin Nata","awinnata@web.app","Active","Premium""#);
        assert_eq!(
            lines[2],
            r#""2","Anna ""Annie"" Smith","anna@example.com","Pending","Standard""#
        );
    }

    #[test]
    fn test_csv_of_empty_collection_has_header() {
        let csv = to_csv::<LogEntry>(&[]).unwrap();
        assert_eq!(csv, "\"id\",\"message\",\"time\",\"level\"\n");
    }

    #[test]
    fn test_csv_numeric_fields() {
        let mut feedback = Feedback::new("Rina", 4, "UI keren, responsif");
        feedback.id = RecordId(7);
        feedback.date = "2025-07-21".into();
        let csv = to_csv(&[feedback]).unwrap();
        assert!(csv.contains(r#""7","Rina","4","UI keren, responsif","2025-07-21""#));
    }

    #[test]
    fn test_json_round_trip() {
        let original = users();
        let json = to_json(&original).unwrap();
        let parsed: Vec<User> = from_json(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_json_is_pretty() {
        let logs = vec![LogEntry::new("boot", "10:00", LogLevel::Info)];
        let json = to_json(&logs).unwrap();
        assert!(json.starts_with("[\n  {"));
        assert!(json.contains("\"level\": \"info\""));
    }

    #[test]
    fn test_export_metadata() {
        let out = export(&users(), ExportFormat::Json, "users").unwrap();
        assert_eq!(out.filename, "users.json");
        assert_eq!(out.mime_type, "application/json");
        assert_eq!(out.row_count, 2);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = from_json::<User>("not json").unwrap_err();
        assert!(!err.is_validation());
    }
}
