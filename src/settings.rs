//! Cosmetic dashboard settings, persisted as TOML.
//!
//! Every field has a default, so a partial file (or an empty one) decodes.
//!
//! ```
//! use admin_widgets::settings::{Settings, Theme};
//!
//! let settings = Settings::from_toml_str("theme = \"light\"\npage_size = 20\n").unwrap();
//! assert_eq!(settings.theme, Theme::Light);
//! assert_eq!(settings.page_size, 20);
//! assert_eq!(settings.app_name, "Admin Dashboard");
//! ```

use crate::controller::DEFAULT_PAGE_SIZE;
use crate::error::{self, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name shown in list titles.
    pub app_name: String,
    /// Colour scheme.
    pub theme: Theme,
    /// Whether notifications are shown.
    pub notifications: bool,
    /// Rows per list page.
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Admin Dashboard".to_string(),
            theme: Theme::Dark,
            notifications: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Settings {
    /// Decodes and validates settings.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        debug!(theme = ?settings.theme, page_size = settings.page_size, "settings loaded");
        Ok(settings)
    }

    /// Encodes the settings as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// The app name must not be blank and the page size must be positive.
    pub fn validate(&self) -> Result<()> {
        error::require("app_name", &self.app_name)?;
        if self.page_size == 0 {
            return Err(Error::invalid("page_size", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            app_name: "Ops".into(),
            theme: Theme::Light,
            notifications: false,
            page_size: 25,
        };
        let text = settings.to_toml_string().unwrap();
        assert!(text.contains("theme = \"light\""));
        assert_eq!(Settings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = Settings::from_toml_str("page_size = 0").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_rejects_blank_name() {
        let err = Settings::from_toml_str("app_name = \"  \"").unwrap_err();
        assert_eq!(err.to_string(), "app_name: is required");
    }

    #[test]
    fn test_rejects_unknown_theme() {
        let err = Settings::from_toml_str("theme = \"sepia\"").unwrap_err();
        assert!(matches!(err, Error::SettingsDecode(_)));
    }

    #[test]
    fn test_toggle_theme() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
