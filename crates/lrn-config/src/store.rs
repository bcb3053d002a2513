//! JSON file store for naming [`Settings`].
//!
//! Reads never fail: an absent file yields the defaults, and an unreadable
//! or malformed one yields the defaults with a warning. Only a JSON object
//! is read as settings; an array is never mapped onto the flags by
//! position. Flags missing from a stored object default to `true`.

use std::fs;
use std::path::{Path, PathBuf};

use lrn_core::Settings;
use serde_json::Value;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored settings, or the all-enabled defaults.
    #[must_use]
    pub fn load(&self) -> Settings {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Settings::default();
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "unreadable settings; using defaults");
                return Settings::default();
            }
        };

        let value = match serde_json::from_str::<Value>(&raw) {
            Ok(value @ Value::Object(_)) => value,
            Ok(other) => {
                tracing::warn!(
                    path = %self.path.display(),
                    found = %other,
                    "settings are not a JSON object; using defaults"
                );
                return Settings::default();
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "malformed settings; using defaults");
                return Settings::default();
            }
        };

        serde_json::from_value(value).unwrap_or_else(|error| {
            tracing::warn!(path = %self.path.display(), %error, "malformed settings; using defaults");
            Settings::default()
        })
    }

    /// Persist `settings` as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] if the file cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.store_error(format!("mkdir: {e}")))?;
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| self.store_error(format!("encode: {e}")))?;
        fs::write(&self.path, json).map_err(|e| self.store_error(format!("write: {e}")))?;
        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Remove the stored settings so the next load yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] if an existing file cannot be removed.
    pub fn reset(&self) -> Result<(), ConfigError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| self.store_error(format!("delete: {e}")))?;
        }
        Ok(())
    }

    fn store_error(&self, reason: String) -> ConfigError {
        ConfigError::Store {
            path: self.path.display().to_string(),
            reason,
        }
    }
}
