//! Debug tracing infrastructure
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=easy_edit::update=debug` - state machine transitions only
//!
//! Logs are also written to `~/.config/easy-edit/logs/easy-edit.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{EasyEditModel, ViewState};

/// Initialize tracing subscriber with console and file logging
///
/// `default_level` is used for the console when RUST_LOG is unset.
pub fn init(default_level: &str) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "easy-edit.log");
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

    // A host may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of widget state for diffing across an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub view: ViewState,
    pub committed: String,
    pub draft: String,
    pub hovering: bool,
    pub valid: bool,
}

impl StateSnapshot {
    pub fn from_model(model: &EasyEditModel) -> Self {
        Self {
            view: model.view,
            committed: model.committed.as_text(),
            draft: model.draft_value().as_text(),
            hovering: model.is_hovering,
            valid: model.is_valid,
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.view != other.view {
            changes.push(format!("view: {:?} → {:?}", self.view, other.view));
        }
        if self.committed != other.committed {
            changes.push(format!("committed: {:?} → {:?}", self.committed, other.committed));
        }
        if self.draft != other.draft {
            changes.push(format!("draft: {:?} → {:?}", self.draft, other.draft));
        }
        if self.hovering != other.hovering {
            changes.push(format!("hovering: {}", other.hovering));
        }
        if self.valid != other.valid {
            changes.push(format!("valid: {}", other.valid));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
