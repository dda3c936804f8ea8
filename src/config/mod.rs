//! Configuration module for Stagehand
//!
//! Every task's config is resolved through one mechanism, lowest precedence
//! first:
//! 1. Built-in defaults
//! 2. Project file (`copy.config.toml`, ...)
//! 3. File named by the task's environment variable (`STAGEHAND_COPY`, ...)
//! 4. File named by the task's CLI flag (`--copy`/`-y`, ...)
//! 5. Config supplied by the caller (highest priority)

mod copy;
mod inputs;
mod loader;
mod resolver;
mod stages;
mod task_info;

pub use copy::{CopyConfig, CopyFilter, CopyOptions, COPY_TASK_INFO};
pub use inputs::ConfigInputs;
pub use loader::ConfigWarning;
pub use resolver::{
    fill_config_defaults, merge_layers, supplied_table, ConfigLayer, ResolvedConfig,
};
pub use stages::{StageCommand, StagesConfig, STAGES_TASK_INFO};
pub use task_info::{TaskConfig, TaskInfo};
