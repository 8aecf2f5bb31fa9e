//! Contextual help line for the interactive components.
//!
//! Components implement [`KeyMap`] to expose their bindings; [`Model`] renders
//! either a single compact line (`short_help`) or columns of grouped bindings
//! (`full_help`). Disabled bindings are never shown.

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Implemented by anything that can describe its key bindings.
pub trait KeyMap {
    /// Bindings shown in the compact, single-line help.
    fn short_help(&self) -> Vec<&key::Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&key::Binding>>;
}

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Key label style.
    pub key: Style,
    /// Description style.
    pub desc: Style,
    /// Separator style.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            desc: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            separator: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// Help renderer.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the expanded multi-column help instead of the single line.
    pub show_all: bool,
    /// Maximum width of the short help line; 0 means unlimited.
    pub width: usize,
    /// Separator between entries of the short help.
    pub short_separator: String,
    /// Separator between columns of the full help.
    pub full_separator: String,
    /// Appended when the short help is truncated.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders help for the given keymap according to `show_all`.
    pub fn view<K: KeyMap + ?Sized>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings as one line, truncated with an ellipsis at `width`.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self
            .styles
            .separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;
        for (i, binding) in bindings.iter().filter(|b| b.enabled()).enumerate() {
            let help = binding.help();
            let mut item = String::new();
            if i > 0 {
                item.push_str(&separator);
            }
            item.push_str(&self.styles.key.clone().inline(true).render(&help.key));
            item.push(' ');
            item.push_str(&self.styles.desc.clone().inline(true).render(&help.desc));

            let item_width = lipgloss::width_visible(&item);
            if self.width > 0 && total_width + item_width > self.width {
                let tail = format!(" {}", self.ellipsis);
                if total_width + lipgloss::width_visible(&tail) <= self.width {
                    out.push_str(&tail);
                }
                break;
            }
            total_width += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders each group as a column, columns separated by `full_separator`.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let columns: Vec<String> = groups
            .iter()
            .filter(|group| group.iter().any(|b| b.enabled()))
            .map(|group| {
                group
                    .iter()
                    .filter(|b| b.enabled())
                    .map(|b| {
                        let help = b.help();
                        format!(
                            "{} {}",
                            self.styles.key.clone().inline(true).render(&help.key),
                            self.styles.desc.clone().inline(true).render(&help.desc)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();

        let mut parts: Vec<&str> = Vec::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(self.full_separator.as_str());
            }
            parts.push(col.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }
}
