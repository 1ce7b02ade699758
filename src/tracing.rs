//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=hover=debug,message=debug` - scoped filtering
//! - `RUST_LOG=posthover::highlight=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/posthover/logs/posthover.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::highlight::HoverState;
use crate::model::PageModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so reports on stdout stay clean, and
/// respects RUST_LOG (default `warn`). File logging is always `debug`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "posthover.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of hover state for diffing across an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverSnapshot {
    pub wired: usize,
    /// Node indices currently hovered, in document order
    pub hovered: Vec<usize>,
}

impl HoverSnapshot {
    pub fn from_model(model: &PageModel) -> Self {
        let highlighter = &model.highlighter;
        Self {
            wired: highlighter.wired().len(),
            hovered: highlighter
                .wired()
                .iter()
                .filter(|&&id| highlighter.state(id) == Some(HoverState::Hovered))
                .map(|id| id.index())
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &HoverSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.wired != other.wired {
            changes.push(format!("wired: {} → {}", self.wired, other.wired));
        }
        for node in other.hovered.iter().filter(|n| !self.hovered.contains(*n)) {
            changes.push(format!("#{}: hovered", node));
        }
        for node in self.hovered.iter().filter(|n| !other.hovered.contains(*n)) {
            changes.push(format!("#{}: neutral", node));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
