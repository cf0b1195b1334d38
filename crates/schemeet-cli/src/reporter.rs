//! Human-readable `--explain` output.

use colored::Colorize;
use schemeet_solver::{DroppedField, FoldReport};
use std::path::PathBuf;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// One line per dropped field, labelled with the input that dropped it.
    pub fn explain(&self, report: &FoldReport, inputs: &[PathBuf]) -> Vec<String> {
        let mut lines = Vec::new();
        for step in &report.steps {
            let label = inputs
                .get(step.index)
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| format!("schema #{}", step.index));
            for field in &step.dropped {
                lines.push(self.format_drop(&label, field));
            }
        }
        if lines.is_empty() {
            lines.push(self.paint_ok("no fields dropped"));
        }
        lines
    }

    fn format_drop(&self, label: &str, field: &DroppedField) -> String {
        if self.color {
            format!(
                "{} {} {}: {}",
                "dropped".red().bold(),
                field.name.yellow(),
                format!("at {label}").dimmed(),
                field.reason
            )
        } else {
            format!("dropped {} at {label}: {}", field.name, field.reason)
        }
    }

    fn paint_ok(&self, message: &str) -> String {
        if self.color {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }
}
