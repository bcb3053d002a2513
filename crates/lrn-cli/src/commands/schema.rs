use lrn_core::Settings;
use lrn_core::responses::RenameReport;
use schemars::schema_for;

use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::document::DocumentSchema;
use crate::output::output;

/// Handle `lrn schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_json(args.kind)?;
    // A schema is only meaningful as JSON.
    let format = if flags.format == OutputFormat::Raw {
        OutputFormat::Raw
    } else {
        OutputFormat::Json
    };
    output(&schema, format)
}

fn schema_json(kind: SchemaKind) -> anyhow::Result<serde_json::Value> {
    let schema = match kind {
        SchemaKind::Settings => schema_for!(Settings),
        SchemaKind::Document => schema_for!(DocumentSchema),
        SchemaKind::Report => schema_for!(RenameReport),
    };
    Ok(serde_json::to_value(schema)?)
}
