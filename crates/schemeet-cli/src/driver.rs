//! Load schema files, fold them, render the result.

use anyhow::{Context, Result};
use schemeet_solver::{FoldReport, MergePolicy, Schema, fold, fold_explained};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::args::{CliArgs, OutputFormat};

/// Result of one CLI run.
#[derive(Debug)]
pub struct RunOutput {
    pub schema: Schema,
    /// Present when `--explain` was requested.
    pub report: Option<FoldReport>,
}

/// Read, parse and validate one schema file.
pub fn load_schema(path: &Path, normalize: bool) -> Result<Schema> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    let schema: Schema = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse schema file {}", path.display()))?;
    let schema = if normalize { schema.normalized() } else { schema };
    schema
        .validate()
        .with_context(|| format!("invalid descriptor in {}", path.display()))?;
    debug!(path = %path.display(), fields = schema.len(), "loaded schema");
    Ok(schema)
}

pub fn load_schemas(paths: &[PathBuf], normalize: bool) -> Result<Vec<Schema>> {
    paths
        .iter()
        .map(|path| load_schema(path, normalize))
        .collect()
}

pub fn run(args: &CliArgs) -> Result<RunOutput> {
    let policy = MergePolicy::from(args.policy);
    let schemas = load_schemas(&args.files, args.normalize)?;
    let empty = match &args.default_schema {
        Some(path) => load_schema(path, args.normalize)?,
        None => Schema::new(),
    };

    info!(schemas = schemas.len(), %policy, "intersecting schemas");
    if args.explain {
        let report = fold_explained(&schemas, policy, empty);
        Ok(RunOutput {
            schema: report.schema.clone(),
            report: Some(report),
        })
    } else {
        Ok(RunOutput {
            schema: fold(&schemas, policy, empty),
            report: None,
        })
    }
}

pub fn render(schema: &Schema, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(schema).context("failed to serialize schema")
        }
        OutputFormat::Json => serde_json::to_string(schema).context("failed to serialize schema"),
        OutputFormat::Ts => Ok(schema.to_string()),
    }
}
