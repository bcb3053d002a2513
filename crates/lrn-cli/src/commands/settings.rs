use anyhow::Context;
use lrn_config::LrnConfig;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::SettingsCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FlagRow {
    flag: &'static str,
    enabled: bool,
}

#[derive(Debug, Serialize)]
struct ResetResponse {
    path: String,
    reset: bool,
}

/// Handle `lrn settings`.
pub fn handle(
    action: &SettingsCommands,
    config: &LrnConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = bootstrap::settings_store(config, flags)?;

    match action {
        SettingsCommands::Show => output(&flag_rows(&store.load()), flags.format),
        SettingsCommands::Set { flag, value } => {
            let mut settings = store.load();
            settings
                .set_flag(flag, *value)
                .with_context(|| format!("cannot set '{flag}'"))?;
            store.save(&settings)?;
            tracing::debug!(flag, value, path = %store.path().display(), "flag stored");
            output(&flag_rows(&settings), flags.format)
        }
        SettingsCommands::Reset => {
            store.reset()?;
            output(
                &ResetResponse {
                    path: store.path().display().to_string(),
                    reset: true,
                },
                flags.format,
            )
        }
    }
}

fn flag_rows(settings: &lrn_core::Settings) -> Vec<FlagRow> {
    settings
        .flags()
        .into_iter()
        .map(|(flag, enabled)| FlagRow { flag, enabled })
        .collect()
}
