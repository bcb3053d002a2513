use anyhow::Context;
use lrn_config::{LrnConfig, SettingsStore, StorageConfig};

use crate::cli::{GlobalFlags, OutputFormat};

/// Load layered configuration, reading a `.env` from the current directory first.
pub fn load_config() -> anyhow::Result<LrnConfig> {
    LrnConfig::load_with_dotenv().context("failed to load lrn configuration")
}

pub fn default_format(config: &LrnConfig) -> anyhow::Result<OutputFormat> {
    OutputFormat::from_config(&config.general.default_format)
}

/// The settings store, honouring `--config-dir` over the configured location.
pub fn settings_store(config: &LrnConfig, flags: &GlobalFlags) -> anyhow::Result<SettingsStore> {
    if let Some(dir) = &flags.config_dir {
        return Ok(SettingsStore::new(StorageConfig::settings_path_in(dir)));
    }
    config
        .settings_store()
        .context("failed to locate the settings store")
}
