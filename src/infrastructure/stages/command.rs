//! Command-backed stage
//!
//! Runs a configured external tool (tsc, rollup, sass, ...) in the project
//! root. Arguments are path templates substituted against the build context
//! at run time.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::config::{StageCommand, StagesConfig};
use crate::domain::ports::{Stage, StageFuture, StageResult};
use crate::domain::value_objects::{
    replace_path_vars, BuildContext, BuildOptions, ChangeEvent, StageKind,
};
use crate::error::{ConfigError, StageError};

/// Exported to every stage process: `dev` or `prod`
pub const MODE_ENV: &str = "STAGEHAND_MODE";
/// Exported to every stage process: `true` or `false`
pub const SOURCE_MAPS_ENV: &str = "STAGEHAND_SOURCE_MAPS";
/// Exported to every stage process: `true` or `false`
pub const MINIFY_ENV: &str = "STAGEHAND_MINIFY";
/// Exported to incremental runs: the change event name
pub const EVENT_ENV: &str = "STAGEHAND_EVENT";
/// Exported to incremental runs: the changed path
pub const CHANGED_PATH_ENV: &str = "STAGEHAND_CHANGED_PATH";

#[derive(Debug, Clone)]
pub struct CommandStage {
    kind: StageKind,
    program: String,
    args: Vec<String>,
    update_args: Option<Vec<String>>,
    env: BTreeMap<String, String>,
    quiet: bool,
}

impl CommandStage {
    pub fn new(kind: StageKind, program: impl Into<String>, command: &StageCommand) -> Self {
        Self {
            kind,
            program: program.into(),
            args: command.args.clone(),
            update_args: command.update_args.clone(),
            env: command.env.clone(),
            quiet: false,
        }
    }

    /// Build the stage for `kind`, failing if its command is not configured.
    pub fn from_config(kind: StageKind, config: &StagesConfig) -> Result<Self, ConfigError> {
        let (program, command) = config.require(kind)?;
        Ok(Self::new(kind, program, command))
    }

    /// Discard the tool's stdout and stderr (used with `--json`).
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    async fn execute(
        &self,
        args: &[String],
        context: &BuildContext,
        options: &BuildOptions,
        change: Option<(ChangeEvent, &Path)>,
    ) -> StageResult {
        let args: Vec<String> = args
            .iter()
            .map(|arg| replace_path_vars(context, arg))
            .collect();

        let mut cmd = Command::new(&self.program);
        cmd.args(&args)
            .current_dir(&context.root_dir)
            .envs(&self.env)
            .env(MODE_ENV, options.mode().as_str())
            .env(SOURCE_MAPS_ENV, options.source_maps.to_string())
            .env(MINIFY_ENV, options.minify.to_string())
            .stdin(Stdio::null())
            .stderr(Stdio::piped());

        if let Some((event, path)) = change {
            cmd.env(EVENT_ENV, event.as_str())
                .env(CHANGED_PATH_ENV, path);
        }

        if self.quiet {
            cmd.stdout(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let output = cmd.output().await.map_err(|e| {
            StageError::new(
                self.kind.key(),
                format!("could not start '{}': {e}", self.program),
            )
        })?;

        if !self.quiet && !output.stderr.is_empty() {
            let _ = std::io::stderr().write_all(&output.stderr);
        }

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(StageError {
            stage: self.kind.key().to_string(),
            message: last_line(&stderr),
        })
    }
}

impl Stage for CommandStage {
    fn name(&self) -> &str {
        self.kind.key()
    }

    fn run<'a>(&'a self, context: &'a BuildContext, options: &'a BuildOptions) -> StageFuture<'a> {
        Box::pin(self.execute(&self.args, context, options, None))
    }

    fn run_update<'a>(
        &'a self,
        event: ChangeEvent,
        path: &'a Path,
        context: &'a BuildContext,
        options: &'a BuildOptions,
    ) -> StageFuture<'a> {
        let args = self.update_args.as_deref().unwrap_or(&self.args);
        Box::pin(self.execute(args, context, options, Some((event, path))))
    }
}

/// Last non-empty line of a tool's diagnostics
fn last_line(stderr: &str) -> Option<String> {
    stderr
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .map(str::to_string)
}
