//! Error types for Stagehand
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stagehand operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Main error type for build operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// Configuration could not be resolved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An external stage reported failure
    #[error(transparent)]
    Stage(#[from] StageError),

    /// A copy entry failed for a non-benign reason
    #[error("Error copying \"{}\" to \"{}\": {message}", .src.display(), .dest.display())]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        message: String,
    },

    /// A path template could not be substituted
    #[error(transparent)]
    PathVar(#[from] PathVarError),

    /// A top-level pipeline failed; carries the underlying message if any
    #[error("{pipeline} failed{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Pipeline {
        pipeline: String,
        message: Option<String>,
    },

    /// A spawned task panicked or was cancelled
    #[error("task '{task}' did not complete: {message}")]
    Join { task: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// Message suitable for annotating a pipeline failure.
    ///
    /// Stage failures without a message yield `None` so the pipeline falls
    /// back to its generic "<name> failed" report.
    pub fn reason(&self) -> Option<String> {
        match self {
            BuildError::Stage(e) => e.message.clone(),
            BuildError::Pipeline { message, .. } => message.clone(),
            other => Some(other.to_string()),
        }
    }
}

/// Configuration resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No resolution source supplied a required field
    #[error("missing required field '{field}' in {task} config")]
    MissingField { task: String, field: String },

    /// A config file explicitly named by a CLI flag or env var does not exist
    #[error("config file not found: {} (named by {origin})", .path.display())]
    FileNotFound { path: PathBuf, origin: String },

    /// A config file could not be read
    #[error("failed to read config file {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    /// A config file or merged table is not valid for the task
    #[error("invalid {task} config{}: {message}", .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Invalid {
        task: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// A CLI flag was given without a value
    #[error("flag '{flag}' requires a file path")]
    MissingFlagValue { flag: String },
}

/// Failure reported by an external stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage} failed{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct StageError {
    pub stage: String,
    pub message: Option<String>,
}

impl StageError {
    pub fn new(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            message: Some(message.into()),
        }
    }

    /// A failure with no diagnostic message
    pub fn bare(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            message: None,
        }
    }
}

/// Strict path substitution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathVarError {
    #[error("unknown path token '{token}' in \"{template}\"")]
    UnknownToken { token: String, template: String },
}
