//! # lrn-config
//!
//! Layered configuration loading for lrn using figment, plus the JSON file
//! store for naming settings.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LRN_*` prefix, `__` as separator)
//! 2. Project-level `.lrn/config.toml`
//! 3. User-level `~/.config/lrn/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LRN_GENERAL__LOCALE` -> `general.locale`,
//! `LRN_STORAGE__SETTINGS_PATH` -> `storage.settings_path`.
//!
//! # Usage
//!
//! ```no_run
//! use lrn_config::LrnConfig;
//!
//! let config = LrnConfig::load_with_dotenv().expect("config");
//! let store = config.settings_store().expect("settings location");
//! let settings = store.load();
//! assert!(settings.flag("enableFigures").is_some());
//! ```

mod error;
mod general;
mod storage;
mod store;

pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};
pub use storage::StorageConfig;
pub use store::SettingsStore;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LrnConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl LrnConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".lrn/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LRN_").split("__"))
    }

    /// The settings store named by `storage.settings_path` or the default
    /// location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoSettingsLocation`] when no path is configured
    /// and the platform has no config directory.
    pub fn settings_store(&self) -> Result<SettingsStore, ConfigError> {
        self.storage
            .resolved_settings_path()
            .map(SettingsStore::new)
            .ok_or(ConfigError::NoSettingsLocation)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lrn").join("config.toml"))
    }
}
