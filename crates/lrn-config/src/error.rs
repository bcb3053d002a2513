//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// The settings file could not be written or removed.
    #[error("Settings store error at {path}: {reason}")]
    Store { path: String, reason: String },

    /// No settings location could be determined.
    #[error("No settings location: set storage.settings_path or LRN_STORAGE__SETTINGS_PATH")]
    NoSettingsLocation,
}
