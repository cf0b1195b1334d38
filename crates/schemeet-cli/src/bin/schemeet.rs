#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use schemeet_cli::args::CliArgs;
use schemeet_cli::driver;
use schemeet_cli::reporter::Reporter;

fn main() -> Result<()> {
    // Only installs a subscriber when SCHEMEET_LOG or RUST_LOG is set.
    schemeet_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let output = driver::run(&args)?;

    if let Some(report) = &output.report {
        let reporter = Reporter::new(std::io::stderr().is_terminal());
        for line in reporter.explain(report, &args.files) {
            eprintln!("{line}");
        }
    }

    let rendered = driver::render(&output.schema, args.format, args.pretty)?;
    match &args.out_file {
        Some(path) => std::fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
