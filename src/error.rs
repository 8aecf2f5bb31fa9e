//! Error types for list mutations, exports and settings.
//!
//! Most list operations are total and never fail: unknown ids and out-of-range
//! pages degrade to no-ops. Errors only surface where the caller has to react,
//! namely form validation, export serialization and settings decoding.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A form submission failed validation; the mutation was not applied.
    #[error("{field}: {message}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// Human readable explanation, suitable for an alert.
        message: String,
    },

    /// Writing CSV output failed.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Encoding or decoding JSON failed.
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings could not be decoded from TOML.
    #[error("invalid settings: {0}")]
    SettingsDecode(#[from] toml::de::Error),

    /// Settings could not be encoded as TOML.
    #[error("could not encode settings: {0}")]
    SettingsEncode(#[from] toml::ser::Error),
}

impl Error {
    /// Builds a validation error for a required field that was left empty.
    pub fn missing(field: &'static str) -> Self {
        Error::Validation {
            field,
            message: "is required".to_string(),
        }
    }

    /// Builds a validation error with a custom message.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }

    /// Returns true for validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::missing`] when `value` is empty or whitespace only.
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::missing(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("name", "").is_err());
        assert!(require("name", "   ").is_err());
        assert!(require("name", "Awin").is_ok());
    }

    #[test]
    fn test_validation_message() {
        let err = Error::missing("email");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "email: is required");
    }
}
