//! Stagehand - front-end build pipeline scheduler
//!
//! Stagehand sequences the external tools of a front-end build (compiler,
//! bundler, style compiler, minifier) into production and development
//! pipelines, copies static assets beside them, and re-runs bundle and style
//! for single file changes while watching.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod watcher;

// Re-exports for convenience
pub use application::{
    build, build_update, build_update_with, build_with, copy, copy_update, CopyTask, Toolchain,
};
pub use config::{fill_config_defaults, ConfigInputs, CopyConfig, CopyOptions, StagesConfig};
pub use domain::value_objects::{
    generate_build_options, generate_context, replace_path_vars, BuildContext, BuildOptions,
    ChangeEvent, ContextSpec, OptionsSpec,
};
pub use error::{BuildError, BuildResult, ConfigError, StageError};
pub use logger::Logger;
