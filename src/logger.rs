//! Named-task logger
//!
//! A `Logger` reports its task's start on creation. `finish` and `fail` take
//! the logger by value, so an invocation can report its outcome only once.

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;

use crate::domain::ports::{BuildEvent, BuildEventSink};

pub struct Logger {
    task: String,
    started: Instant,
    sink: Arc<dyn BuildEventSink>,
}

impl Logger {
    /// Start reporting `task`.
    pub fn new(task: impl Into<String>, sink: Arc<dyn BuildEventSink>) -> Self {
        let task = task.into();
        sink.on_event(BuildEvent::TaskStarted {
            task: task.clone(),
            at: Local::now(),
        });
        Self {
            task,
            started: Instant::now(),
            sink,
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    /// Non-fatal note attached to this task
    pub fn warn(&self, message: impl Into<String>) {
        self.sink.on_event(BuildEvent::Warning {
            message: message.into(),
        });
    }

    pub fn finish(self) {
        self.sink.on_event(BuildEvent::TaskFinished {
            task: self.task,
            at: Local::now(),
            duration_ms: elapsed_ms(self.started),
        });
    }

    pub fn fail(self, message: impl Into<String>) {
        self.sink.on_event(BuildEvent::TaskFailed {
            task: self.task,
            at: Local::now(),
            duration_ms: elapsed_ms(self.started),
            message: message.into(),
        });
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
