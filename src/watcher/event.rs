//! Change classification and debouncing

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::EventKind;

use crate::domain::value_objects::ChangeEvent;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Map a notify event kind to a change event.
///
/// `exists` and `is_dir` describe the path as seen when the event arrived.
/// Access and unclassified events yield `None`.
pub fn classify(kind: &EventKind, exists: bool, is_dir: bool) -> Option<ChangeEvent> {
    match kind {
        EventKind::Create(CreateKind::Folder) => Some(ChangeEvent::AddDir),
        EventKind::Create(_) if is_dir => Some(ChangeEvent::AddDir),
        EventKind::Create(_) => Some(ChangeEvent::Add),
        EventKind::Remove(RemoveKind::Folder) => Some(ChangeEvent::UnlinkDir),
        EventKind::Remove(_) => Some(ChangeEvent::Unlink),
        EventKind::Modify(ModifyKind::Name(_)) => Some(match (exists, is_dir) {
            (true, true) => ChangeEvent::AddDir,
            (true, false) => ChangeEvent::Add,
            (false, _) => ChangeEvent::Unlink,
        }),
        EventKind::Modify(_) if is_dir || !exists => None,
        EventKind::Modify(_) => Some(ChangeEvent::Change),
        _ => None,
    }
}

/// Collects changes until the stream has been quiet for the debounce window.
///
/// A path seen several times is reported once, with its latest event.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: BTreeMap<PathBuf, ChangeEvent>,
    last_change: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: BTreeMap::new(),
            last_change: None,
        }
    }

    pub fn add(&mut self, path: PathBuf, change: ChangeEvent) {
        self.pending.insert(path, change);
        self.last_change = Some(Instant::now());
    }

    pub fn is_ready(&self) -> bool {
        match self.last_change {
            Some(last) => !self.pending.is_empty() && last.elapsed() >= self.window,
            None => false,
        }
    }

    /// Drain pending changes in path order.
    pub fn take(&mut self) -> Vec<(PathBuf, ChangeEvent)> {
        self.last_change = None;
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
