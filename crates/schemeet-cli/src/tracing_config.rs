//! Log output for the `schemeet` binary.
//!
//! Logging is off unless `SCHEMEET_LOG` (or `RUST_LOG`) holds a filter.
//! `SCHEMEET_LOG_FORMAT` selects how events are written to stderr:
//!
//! | value | output |
//! |---|---|
//! | `text` | one line per event (default) |
//! | `tree` | `tracing-tree` indentation, one level per `fold` span |
//! | `json` | one object per event |
//!
//! ```bash
//! SCHEMEET_LOG=debug SCHEMEET_LOG_FORMAT=tree schemeet a.json b.json
//! SCHEMEET_LOG=schemeet::query_json=trace SCHEMEET_LOG_FORMAT=json schemeet a.json b.json
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};
use tracing_tree::HierarchicalLayer;

pub const LOG_VAR: &str = "SCHEMEET_LOG";
pub const LOG_FORMAT_VAR: &str = "SCHEMEET_LOG_FORMAT";
const FALLBACK_LOG_VAR: &str = "RUST_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unrecognized values fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TracingConfig {
    /// Filter directives; `None` disables logging.
    pub directives: Option<String>,
    pub format: LogFormat,
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through `lookup`. `SCHEMEET_LOG` wins over `RUST_LOG`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let directives = lookup(LOG_VAR).or_else(|| lookup(FALLBACK_LOG_VAR));
        let format = lookup(LOG_FORMAT_VAR)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        TracingConfig { directives, format }
    }

    pub fn is_enabled(&self) -> bool {
        self.directives.is_some()
    }

    /// Install the global subscriber. Returns `false` when logging is off or
    /// a subscriber is already installed.
    pub fn install(self) -> bool {
        let Some(directives) = self.directives else {
            return false;
        };
        let filter = EnvFilter::builder().parse_lossy(directives);

        let layer = match self.format {
            LogFormat::Text => fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter)
                .boxed(),
            LogFormat::Tree => HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true)
                .with_filter(filter)
                .boxed(),
            LogFormat::Json => fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_filter(filter)
                .boxed(),
        };

        tracing_subscriber::registry().with(layer).try_init().is_ok()
    }
}

/// Install logging from the environment. Output goes to stderr so stdout
/// carries only the resulting schema.
pub fn init_tracing() {
    TracingConfig::from_env().install();
}
