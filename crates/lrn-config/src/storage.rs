//! Where stored naming settings live.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Explicit settings file. Empty means `<config_dir>/lrn/settings.json`.
    #[serde(default)]
    pub settings_path: String,
}

impl StorageConfig {
    /// The settings file to use, if one can be determined.
    #[must_use]
    pub fn resolved_settings_path(&self) -> Option<PathBuf> {
        if self.settings_path.is_empty() {
            dirs::config_dir().map(|dir| dir.join("lrn").join(SETTINGS_FILE_NAME))
        } else {
            Some(PathBuf::from(&self.settings_path))
        }
    }

    /// The settings file inside an explicit config directory.
    #[must_use]
    pub fn settings_path_in(dir: impl Into<PathBuf>) -> PathBuf {
        dir.into().join(SETTINGS_FILE_NAME)
    }
}
