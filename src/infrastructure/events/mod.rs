//! Event Sink Implementations
//!
//! Provides concrete implementations of BuildEventSink:
//! - ConsoleEventSink: Human-readable timestamped lines
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::{render_event, ConsoleEventSink};
pub use json::JsonEventSink;
