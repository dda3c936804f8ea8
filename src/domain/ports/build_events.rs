//! Build Event Port
//!
//! Provides an observable interface for build invocations.
//! Enables console progress, NDJSON event streams, and test recording.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::value_objects::ChangeEvent;

/// Event emitted while tasks run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BuildEvent {
    /// A named task started
    TaskStarted { task: String, at: DateTime<Local> },

    /// A named task finished successfully
    TaskFinished {
        task: String,
        at: DateTime<Local>,
        duration_ms: u64,
    },

    /// A named task failed
    TaskFailed {
        task: String,
        at: DateTime<Local>,
        duration_ms: u64,
        message: String,
    },

    /// Non-fatal problem (unknown config keys, ignored watch errors)
    Warning { message: String },

    /// Watch session started
    WatchStarted { source: PathBuf },

    /// A debounced file change is about to be processed
    FileChanged { change: ChangeEvent, path: PathBuf },

    /// Watch session ended
    Shutdown,
}

impl BuildEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Trait for receiving build events
///
/// Implementations:
/// - ConsoleEventSink: timestamped, colored lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}
}
