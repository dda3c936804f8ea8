//! Domain Layer
//!
//! Types describing a build invocation and the ports stages are driven
//! through. No process spawning or filesystem access happens here.
//!
//! ## Structure
//!
//! - `value_objects/` - Context, options, change events, path tokens
//! - `ports/` - Stage, cleaner and event sink contracts

pub mod ports;
pub mod value_objects;
