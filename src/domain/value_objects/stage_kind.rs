//! Stage identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// The externally-implemented stages a pipeline can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Incremental type-check/compile (development)
    Compile,
    /// Ahead-of-time compile (production)
    CompileAot,
    Bundle,
    Style,
    Minify,
}

impl StageKind {
    pub const ALL: [StageKind; 5] = [
        StageKind::Compile,
        StageKind::CompileAot,
        StageKind::Bundle,
        StageKind::Style,
        StageKind::Minify,
    ];

    /// Key of this stage's table in the stages config
    pub fn key(self) -> &'static str {
        match self {
            StageKind::Compile => "compile",
            StageKind::CompileAot => "compile_aot",
            StageKind::Bundle => "bundle",
            StageKind::Style => "style",
            StageKind::Minify => "minify",
        }
    }

    /// Whether the stage has an incremental form
    pub fn supports_update(self) -> bool {
        matches!(self, StageKind::Bundle | StageKind::Style)
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
