//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod stage;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use stage::{Cleaner, Stage, StageFuture, StageResult};
