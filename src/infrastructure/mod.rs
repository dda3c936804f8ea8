//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sinks (console, JSON)
//! - `fs/` - The copy engine
//! - `stages/` - Command-backed stages
//! - `clean` - The output root cleaner

mod clean;
pub mod events;
pub mod fs;
pub mod stages;

pub use clean::OutputCleaner;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use stages::CommandStage;
