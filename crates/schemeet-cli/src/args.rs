use clap::{Parser, ValueEnum};
use schemeet_solver::MergePolicy;
use std::path::PathBuf;

/// CLI arguments for the schemeet binary.
#[derive(Parser, Debug)]
#[command(
    name = "schemeet",
    version,
    about = "Intersect record schemas under strict or upcast field compatibility"
)]
pub struct CliArgs {
    /// Schema files: JSON objects mapping field names to descriptors.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Field compatibility policy.
    #[arg(short = 'p', long, value_enum, ignore_case = true, default_value_t = Policy::Upcast)]
    pub policy: Policy,

    /// Schema to print when no files are given (defaults to the empty schema).
    #[arg(long = "default", value_name = "FILE")]
    pub default_schema: Option<PathBuf>,

    /// Rewrite unions into normal form instead of rejecting them.
    #[arg(long)]
    pub normalize: bool,

    /// Report every dropped field and the reason on stderr.
    #[arg(long)]
    pub explain: bool,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Write the result to a file instead of stdout.
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out_file: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    Strict,
    Upcast,
}

impl From<Policy> for MergePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Strict => MergePolicy::Strict,
            Policy::Upcast => MergePolicy::Upcast,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The same JSON descriptor format the inputs use.
    Json,
    /// TypeScript-like type literal.
    Ts,
}
