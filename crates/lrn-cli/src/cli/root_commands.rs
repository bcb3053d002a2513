use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::SettingsCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Rename the selection stored in a document file.
    Rename(RenameArgs),
    /// Stored naming settings.
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Print a JSON Schema.
    Schema(SchemaArgs),
}

/// Arguments for `lrn rename`.
#[derive(Clone, Debug, Args)]
pub struct RenameArgs {
    /// Document JSON: `{"styles": {...}, "selection": [...]}`.
    pub document: PathBuf,

    /// Compute and report names without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Write the renamed document to this path.
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input document.
    #[arg(long)]
    pub in_place: bool,

    /// Override a stored flag for this run only (e.g. `includeFillColor=false`).
    #[arg(long = "set", value_name = "FLAG=BOOL", value_parser = parse_flag_override)]
    pub overrides: Vec<FlagOverride>,
}

/// One `--set flag=bool` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagOverride {
    pub flag: String,
    pub value: bool,
}

fn parse_flag_override(raw: &str) -> Result<FlagOverride, String> {
    let (flag, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FLAG=BOOL, got '{raw}'"))?;
    let value = value
        .trim()
        .parse::<bool>()
        .map_err(|_| format!("'{value}' is not true or false"))?;
    Ok(FlagOverride {
        flag: flag.trim().to_string(),
        value,
    })
}

/// Schemas `lrn schema` can print.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    Settings,
    Document,
    Report,
}

/// Arguments for `lrn schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub kind: SchemaKind,
}
