//! File change events fed to the incremental pipeline

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of filesystem change observed during a watch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeEvent {
    Add,
    Change,
    Unlink,
    AddDir,
    UnlinkDir,
}

impl ChangeEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeEvent::Add => "add",
            ChangeEvent::Change => "change",
            ChangeEvent::Unlink => "unlink",
            ChangeEvent::AddDir => "addDir",
            ChangeEvent::UnlinkDir => "unlinkDir",
        }
    }

    pub fn is_dir(self) -> bool {
        matches!(self, ChangeEvent::AddDir | ChangeEvent::UnlinkDir)
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized event name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChangeEvent(pub String);

impl fmt::Display for UnknownChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown change event '{}' (expected add, change, unlink, addDir or unlinkDir)",
            self.0
        )
    }
}

impl std::error::Error for UnknownChangeEvent {}

impl FromStr for ChangeEvent {
    type Err = UnknownChangeEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(ChangeEvent::Add),
            "change" => Ok(ChangeEvent::Change),
            "unlink" => Ok(ChangeEvent::Unlink),
            "addDir" | "add-dir" => Ok(ChangeEvent::AddDir),
            "unlinkDir" | "unlink-dir" => Ok(ChangeEvent::UnlinkDir),
            other => Err(UnknownChangeEvent(other.to_string())),
        }
    }
}
