//! General application configuration.

use lrn_engine::Locale;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output formats `lrn` knows how to render.
pub const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    String::from("json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Locale for child-count wording in container names.
    #[serde(default)]
    pub locale: Locale,

    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    /// Reject output formats the CLI cannot render.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown `default_format`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if OUTPUT_FORMATS.contains(&self.default_format.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: String::from("general.default_format"),
                reason: format!(
                    "'{}' is not one of {}",
                    self.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
            })
        }
    }
}
