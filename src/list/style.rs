//! Styles of the list view.
//!
//! The default styles use adaptive colours, which follow the terminal's own
//! background. [`ListStyles::for_theme`] pins the palette to a configured
//! [`Theme`] instead.

use crate::settings::Theme;
use lipgloss_extras::prelude::*;

/// Bullet used by the live-tail badge and the status separators.
pub const BULLET: &str = "•";

/// Styles for every part of the list view.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Line holding the title.
    pub title_bar: Style,
    /// The title itself.
    pub title: Style,
    /// Badge shown next to the title while the live tail runs.
    pub tail_badge: Style,
    /// Label in front of the active category.
    pub category_label: Style,
    /// The active category.
    pub category_value: Style,
    /// Placeholder line when nothing matches.
    pub no_items: Style,
    /// Page indicator line.
    pub pagination: Style,
    /// Neutral status messages.
    pub status_info: Style,
    /// Validation failures and other alerts.
    pub status_alert: Style,
    /// Pending confirmation prompt.
    pub confirm: Style,
    /// Help block.
    pub help: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        Self {
            title_bar: Style::new().padding(0, 0, 1, 2),
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            tail_badge: Style::new().foreground(Color::from("#04B575")).bold(true),
            category_label: Style::new().foreground(subdued.clone()),
            category_value: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            pagination: Style::new().foreground(subdued).padding_left(2),
            status_info: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            status_alert: Style::new().foreground(Color::from("#FF5F87")).bold(true),
            confirm: Style::new().foreground(Color::from("#FFAF00")).bold(true),
            help: Style::new().padding(1, 0, 0, 2),
        }
    }
}

impl ListStyles {
    /// Styles with colours fixed for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        let (text, subdued) = match theme {
            Theme::Dark => ("#dddddd", "#5C5C5C"),
            Theme::Light => ("#1a1a1a", "#9B9B9B"),
        };
        Self {
            category_label: Style::new().foreground(Color::from(subdued)),
            category_value: Style::new().foreground(Color::from(text)),
            no_items: Style::new().foreground(Color::from(subdued)),
            pagination: Style::new().foreground(Color::from(subdued)).padding_left(2),
            ..Self::default()
        }
    }
}
