//! External tool configuration
//!
//! Each stage is driven through a command line. Example `stages.config.toml`:
//!
//! ```toml
//! [compile]
//! command = "tsc"
//! args = ["--project", "{{ROOT}}/tsconfig.json", "--outDir", "{{TMP}}"]
//!
//! [bundle]
//! command = "rollup"
//! args = ["-c", "{{ROOT}}/rollup.config.js"]
//! update_args = ["-c", "{{ROOT}}/rollup.config.js", "--incremental"]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::StageKind;
use crate::error::ConfigError;

use super::task_info::{TaskConfig, TaskInfo};

pub const STAGES_TASK_INFO: TaskInfo = TaskInfo {
    task: "stages",
    context_property: "stages_config",
    full_arg: "--stages",
    short_arg: "-s",
    env_var: "STAGEHAND_STAGES",
    default_config_filename: "stages.config.toml",
};

/// Command line for one stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCommand {
    /// Executable; required for any stage the selected pipeline runs
    #[serde(default)]
    pub command: Option<String>,

    /// Arguments (path templates)
    #[serde(default)]
    pub args: Vec<String>,

    /// Arguments for the incremental form; falls back to `args`
    #[serde(default)]
    pub update_args: Option<Vec<String>>,

    /// Extra environment for the process
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// Commands for every stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagesConfig {
    #[serde(default)]
    pub compile: Option<StageCommand>,
    #[serde(default)]
    pub compile_aot: Option<StageCommand>,
    #[serde(default)]
    pub bundle: Option<StageCommand>,
    #[serde(default)]
    pub style: Option<StageCommand>,
    #[serde(default)]
    pub minify: Option<StageCommand>,
}

impl StagesConfig {
    pub fn get(&self, kind: StageKind) -> Option<&StageCommand> {
        match kind {
            StageKind::Compile => self.compile.as_ref(),
            StageKind::CompileAot => self.compile_aot.as_ref(),
            StageKind::Bundle => self.bundle.as_ref(),
            StageKind::Style => self.style.as_ref(),
            StageKind::Minify => self.minify.as_ref(),
        }
    }

    /// The stage's command, or a configuration error naming the missing field.
    pub fn require(&self, kind: StageKind) -> Result<(&str, &StageCommand), ConfigError> {
        let missing = |field: String| ConfigError::MissingField {
            task: STAGES_TASK_INFO.task.to_string(),
            field,
        };

        let stage = self.get(kind).ok_or_else(|| missing(kind.key().to_string()))?;
        let command = stage
            .command
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| missing(format!("{}.command", kind.key())))?;

        Ok((command, stage))
    }
}

impl TaskConfig for StagesConfig {
    const INFO: TaskInfo = STAGES_TASK_INFO;

    const DEFAULTS: &'static str = "";

    const KNOWN_KEYS: &'static [&'static str] = &[
        "compile",
        "compile_aot",
        "bundle",
        "style",
        "minify",
        "command",
        "args",
        "update_args",
        "env",
    ];
}
