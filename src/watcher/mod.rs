//! File watcher for incremental rebuilds
//!
//! Implements the `watch` command with:
//! - Debouncing (100ms)
//! - Sequential `build_update` per changed file
//! - Graceful Ctrl+C shutdown

mod event;
mod session;

pub use event::{classify, Debouncer, DEBOUNCE_MS};
pub use session::WatchSession;
