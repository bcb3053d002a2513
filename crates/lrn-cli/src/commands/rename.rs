use std::path::PathBuf;

use anyhow::{Context, bail};
use lrn_config::LrnConfig;
use lrn_core::Settings;
use lrn_core::responses::RenameReport;
use lrn_engine::NameEngine;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::root_commands::{FlagOverride, RenameArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::document::Document;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RenameResponse {
    message: String,
    dry_run: bool,
    written_to: Option<String>,
    #[serde(flatten)]
    report: RenameReport,
}

/// Handle `lrn rename`.
pub async fn handle(
    args: &RenameArgs,
    config: &LrnConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target = write_target(args)?;
    let store = bootstrap::settings_store(config, flags)?;
    let settings = apply_overrides(store.load(), &args.overrides)?;

    let mut document = Document::read(&args.document)?;
    let styles = std::mem::take(&mut document.styles);
    let engine = NameEngine::with_styles(settings, styles).with_locale(config.general.locale);

    let report = if args.dry_run {
        engine.preview_selection(&document.selection).await
    } else {
        engine.rename_selection(&mut document.selection).await
    };

    let written_to = match target {
        Some(path) => {
            let patched = document.apply_changes(&report.changes);
            document.write(&path)?;
            tracing::debug!(patched, path = %path.display(), "document written");
            Some(path.display().to_string())
        }
        None => None,
    };

    let response = RenameResponse {
        message: report.outcome.message(),
        dry_run: args.dry_run,
        written_to,
        report,
    };
    print_response(&response, flags)
}

/// Where the renamed document goes. Dry runs write nothing.
fn write_target(args: &RenameArgs) -> anyhow::Result<Option<PathBuf>> {
    if args.dry_run {
        return Ok(None);
    }
    match (&args.output, args.in_place) {
        (Some(path), _) => Ok(Some(path.clone())),
        (None, true) => Ok(Some(args.document.clone())),
        (None, false) => bail!("choose where to write: --in-place, --output <PATH>, or --dry-run"),
    }
}

fn apply_overrides(mut settings: Settings, overrides: &[FlagOverride]) -> anyhow::Result<Settings> {
    for FlagOverride { flag, value } in overrides {
        settings
            .set_flag(flag, *value)
            .with_context(|| format!("invalid --set {flag}={value}"))?;
    }
    Ok(settings)
}

fn print_response(response: &RenameResponse, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Table {
        return output(response, flags.format);
    }

    if !response.report.changes.is_empty() {
        output(&response.report.changes, OutputFormat::Table)?;
    }
    if !response.report.failures.is_empty() {
        output(&response.report.failures, OutputFormat::Table)?;
    }
    if !flags.quiet {
        println!("{}", response.message);
    }
    Ok(())
}
