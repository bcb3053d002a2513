use clap::{ArgAction, Subcommand, builder::BoolishValueParser};

/// Stored naming settings.
#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show every flag and its stored value.
    Show,
    /// Store one flag.
    Set {
        /// Flag name, e.g. `includeCornerRadius`.
        flag: String,
        /// New value (true/false, yes/no, on/off, 1/0).
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        value: bool,
    },
    /// Delete stored settings so every flag is enabled again.
    Reset,
}
