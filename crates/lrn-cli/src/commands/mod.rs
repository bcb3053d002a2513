pub mod rename;
pub mod schema;
pub mod settings;

use lrn_config::LrnConfig;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &LrnConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Rename(args) => rename::handle(&args, config, flags).await,
        Commands::Settings { action } => settings::handle(&action, config, flags),
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
