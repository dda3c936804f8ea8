//! Command handlers

mod build;
mod copy;
mod paths;
mod update;
mod watch;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};

use stagehand::application::{CopyTask, Toolchain};
use stagehand::config::{fill_config_defaults, ConfigInputs, CopyConfig, StagesConfig, TaskConfig};
use stagehand::domain::ports::{BuildEvent, BuildEventSink};
use stagehand::domain::value_objects::{generate_context, BuildContext, ContextSpec, StageKind};
use stagehand::error::{BuildResult, ConfigError};
use stagehand::infrastructure::{ConsoleEventSink, JsonEventSink};

use crate::cli::{Cli, Commands};

pub use build::cmd_build;
pub use copy::cmd_copy;
pub use paths::cmd_paths;
pub use update::cmd_update;
pub use watch::cmd_watch;

/// Everything a command needs that comes from global flags and the process
pub struct Invocation {
    pub context: BuildContext,
    pub inputs: ConfigInputs,
    pub sink: Arc<dyn BuildEventSink>,
    pub json: bool,
}

impl Invocation {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        let root = cli
            .root
            .as_ref()
            .map(|root| cwd.join(root))
            .unwrap_or(cwd);

        let context = generate_context(ContextSpec {
            root_dir: Some(root),
            src_dir: cli.src.clone(),
            www_dir: cli.www.clone(),
            build_dir: None,
            tmp_dir: cli.tmp.clone(),
        });

        let sink: Arc<dyn BuildEventSink> = if cli.json {
            Arc::new(JsonEventSink::stdout())
        } else {
            Arc::new(ConsoleEventSink::stderr())
        };

        Ok(Self {
            context,
            inputs: ConfigInputs::from_process().with_args(cli.config_args()),
            sink,
            json: cli.json,
        })
    }

    pub fn spec(&self) -> ContextSpec {
        ContextSpec::from(self.context.clone())
    }

    /// Resolve a task config, surfacing unknown keys as warnings.
    pub fn resolve<T: TaskConfig>(&self) -> Result<T, ConfigError> {
        let resolved = fill_config_defaults::<T>(&self.context, None, &self.inputs)?;
        for warning in resolved.warnings {
            self.sink.on_event(BuildEvent::Warning {
                message: warning.to_string(),
            });
        }
        Ok(resolved.config)
    }

    /// Command stages for `chain` plus the copy task run beside a full build.
    ///
    /// Called from inside a pipeline so that a config error is reported as
    /// that pipeline's failure.
    pub fn toolchain(&self, chain: &[StageKind]) -> BuildResult<Toolchain> {
        let stages = self.resolve::<StagesConfig>()?;
        let copy =
            CopyTask::new(self.resolve::<CopyConfig>()?).with_events(Arc::clone(&self.sink));
        Ok(Toolchain::from_config(&stages, chain, Arc::new(copy), self.json)?)
    }

    /// A path argument, relative to the working directory
    pub fn absolute(&self, path: &Path) -> Result<PathBuf> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        Ok(cwd.join(path))
    }
}

/// Run the selected command. Failures already reported by a task logger map
/// to a failing exit code; everything else is returned as an error.
pub async fn dispatch(cli: Cli) -> Result<ExitCode> {
    let invocation = Invocation::from_cli(&cli)?;

    let succeeded = match cli.command {
        Commands::Build {
            prod,
            no_sourcemaps,
            minify,
        } => cmd_build(&invocation, prod, no_sourcemaps, minify).await,
        Commands::Copy => cmd_copy(&invocation).await,
        Commands::Update { event, path, prod } => {
            cmd_update(&invocation, event, &path, prod).await?
        }
        Commands::Watch => cmd_watch(&invocation).await?,
        Commands::Paths { template, strict } => cmd_paths(&invocation, &template, strict)?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
