//! Console Event Sink
//!
//! Human-readable, timestamped lines on stderr.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{DateTime, Local};
use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::domain::ports::{BuildEvent, BuildEventSink};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
}

impl ConsoleEventSink {
    /// Write to stderr, colored when it is a terminal and `NO_COLOR` is unset.
    pub fn stderr() -> Self {
        let color = io::stderr().is_terminal()
            && std::env::var_os("NO_COLOR").is_none()
            && std::env::var_os("STAGEHAND_NO_COLOR").is_none();
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
            color,
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        let line = render_event(&event, Local::now(), self.color);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }
}

/// Render one event. `now` stamps events that carry no time of their own.
pub fn render_event(event: &BuildEvent, now: DateTime<Local>, color: bool) -> String {
    let paint = |text: String, style: fn(String) -> String| {
        if color {
            style(text)
        } else {
            text
        }
    };

    let (at, body) = match event {
        BuildEvent::TaskStarted { task, at } => (*at, format!("{task} started ...")),
        BuildEvent::TaskFinished {
            task,
            at,
            duration_ms,
        } => (
            *at,
            paint(
                format!("{task} finished in {}", format_duration(*duration_ms)),
                |s| s.green().to_string(),
            ),
        ),
        BuildEvent::TaskFailed { at, message, .. } => {
            (*at, paint(message.clone(), |s| s.red().bold().to_string()))
        }
        BuildEvent::Warning { message } => {
            (now, paint(format!("warning: {message}"), |s| s.yellow().to_string()))
        }
        BuildEvent::WatchStarted { source } => (
            now,
            paint(format!("watching {} for changes", source.display()), |s| {
                s.cyan().to_string()
            }),
        ),
        BuildEvent::FileChanged { change, path } => {
            (now, format!("{change}: {}", path.display()))
        }
        BuildEvent::Shutdown => (now, "watch stopped".to_string()),
    };

    let stamp = format!("[{}]", at.format("%H:%M:%S"));
    format!("{}  {body}", paint(stamp, |s| s.dim().to_string()))
}

fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms} ms")
    } else {
        format!("{:.2} s", ms as f64 / 1000.0)
    }
}
