//! Plain-text table used by the list view to render the visible page.
//!
//! Records describe their columns through [`Tabular`]; [`Model`] lays the
//! cells out with widths measured by display width, so wide characters line
//! up.

use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// A table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Fixed width in cells; `None` sizes the column to its content.
    pub width: Option<usize>,
}

impl Column {
    /// Creates an auto-sized column.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: None,
        }
    }

    /// Fixes the column width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// A record that can be shown as a table row.
pub trait Tabular {
    /// Column headers, in display order.
    fn columns() -> Vec<Column>;
    /// One cell per column.
    fn cells(&self) -> Vec<String>;
}

/// Styles for the table.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Header row.
    pub header: Style,
    /// Selected row.
    pub selected: Style,
    /// Other rows.
    pub cell: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            selected: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            cell: Style::new(),
        }
    }
}

/// A table of string cells with one selected row.
#[derive(Debug, Clone)]
pub struct Model {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    selected: Option<usize>,
    /// Styles.
    pub styles: Styles,
}

impl Model {
    /// Creates an empty table.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            selected: None,
            styles: Styles::default(),
        }
    }

    /// Creates a table for a record type's columns.
    pub fn for_records<T: Tabular>() -> Self {
        Self::new(T::columns())
    }

    /// Sets the rows (builder pattern).
    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the rows from records (builder pattern).
    pub fn with_records<'a, T, I>(mut self, records: I) -> Self
    where
        T: Tabular + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.rows = records.into_iter().map(Tabular::cells).collect();
        self
    }

    /// Marks a row as selected (builder pattern). Out-of-range indices select nothing.
    pub fn with_selected(mut self, selected: usize) -> Self {
        self.selected = (selected < self.rows.len()).then_some(selected);
        self
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                column.width.unwrap_or_else(|| {
                    self.rows
                        .iter()
                        .filter_map(|row| row.get(i))
                        .map(|cell| cell.width())
                        .chain(std::iter::once(column.title.width()))
                        .max()
                        .unwrap_or(0)
                })
            })
            .collect()
    }

    /// Renders header, separator and rows. The selected row is prefixed with `>`.
    pub fn view(&self) -> String {
        let widths = self.widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let header: Vec<String> = self.columns.iter().map(|c| c.title.clone()).collect();
        lines.push(
            self.styles
                .header
                .render(&format!("  {}", layout_row(&header, &widths))),
        );
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        lines.push(format!("  {}", separator.join("-+-")));

        for (index, row) in self.rows.iter().enumerate() {
            let line = layout_row(row, &widths);
            if self.selected == Some(index) {
                lines.push(self.styles.selected.render(&format!("> {line}")));
            } else {
                lines.push(self.styles.cell.render(&format!("  {line}")));
            }
        }

        lines.join("\n")
    }
}

fn layout_row(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, width)| fit(cells.get(i).map(String::as_str).unwrap_or(""), *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Pads or truncates `text` to exactly `width` display cells.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    let truncate = text.width() > width;
    let budget = if truncate { width.saturating_sub(1) } else { width };
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    if truncate && width > 0 {
        out.push('…');
        used += 1;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
