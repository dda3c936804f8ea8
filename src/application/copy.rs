//! Copy task
//!
//! Every include entry is substituted, then copied on its own blocking task.
//! All entries are joined before the task settles; one non-benign failure
//! fails the whole copy.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::{fill_config_defaults, ConfigInputs, CopyConfig, CopyFilter};
use crate::domain::ports::{BuildEventSink, NoopEventSink, Stage, StageFuture};
use crate::domain::value_objects::{
    generate_context, substitute, BuildContext, BuildOptions, ChangeEvent, ContextSpec,
};
use crate::error::{BuildError, BuildResult, ConfigError, StageError};
use crate::infrastructure::fs::{copy_path, is_benign, CopyStats};
use crate::logger::Logger;

/// One include entry with its paths substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyJob {
    pub src: PathBuf,
    pub dest: PathBuf,
    pub filter: CopyFilter,
}

/// A resolved copy configuration, ready to run.
#[derive(Clone)]
pub struct CopyTask {
    config: CopyConfig,
    sink: Arc<dyn BuildEventSink>,
}

impl CopyTask {
    pub fn new(config: CopyConfig) -> Self {
        Self {
            config,
            sink: Arc::new(NoopEventSink),
        }
    }

    /// Resolve the copy config for `context` from every source.
    pub fn resolve(
        context: &BuildContext,
        supplied: Option<&toml::Table>,
        inputs: &ConfigInputs,
    ) -> Result<Self, ConfigError> {
        let resolved = fill_config_defaults::<CopyConfig>(context, supplied, inputs)?;
        Ok(Self::new(resolved.config))
    }

    /// Report start/finish of the `copy` task when run as a stage.
    pub fn with_events(mut self, sink: Arc<dyn BuildEventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &CopyConfig {
        &self.config
    }

    /// Substitute every entry's paths. Relative results are anchored on the root.
    pub fn jobs(&self, context: &BuildContext) -> BuildResult<Vec<CopyJob>> {
        let policy = self.config.token_policy();
        self.config
            .include
            .iter()
            .map(|entry| {
                let src = substitute(context, &entry.src, policy)?;
                let dest = substitute(context, &entry.dest, policy)?;
                Ok(CopyJob {
                    src: context.resolve(src),
                    dest: context.resolve(dest),
                    filter: entry.filter.clone(),
                })
            })
            .collect()
    }

    /// Copy every entry concurrently and join them all.
    pub async fn execute(&self, context: &BuildContext) -> BuildResult<CopyStats> {
        run_jobs(self.jobs(context)?).await
    }

    /// Copy only the entries whose source contains `path`.
    pub async fn execute_for(&self, context: &BuildContext, path: &Path) -> BuildResult<CopyStats> {
        let path = context.resolve(path);
        let jobs = self
            .jobs(context)?
            .into_iter()
            .filter(|job| path.starts_with(&job.src))
            .collect();
        run_jobs(jobs).await
    }
}

impl Stage for CopyTask {
    fn name(&self) -> &str {
        "copy"
    }

    fn run<'a>(&'a self, context: &'a BuildContext, _: &'a BuildOptions) -> StageFuture<'a> {
        Box::pin(async move {
            let logger = Logger::new("copy", Arc::clone(&self.sink));
            match self.execute(context).await {
                Ok(_) => {
                    logger.finish();
                    Ok(())
                }
                Err(e) => {
                    let message = e.to_string();
                    logger.fail(message.clone());
                    Err(StageError::new("copy", message))
                }
            }
        })
    }
}

/// Top-level copy: resolve, copy, and report exactly once.
pub async fn copy(
    context: ContextSpec,
    supplied: Option<&toml::Table>,
    inputs: &ConfigInputs,
    sink: Arc<dyn BuildEventSink>,
) -> BuildResult<CopyStats> {
    let context = generate_context(context);
    let logger = Logger::new("copy", sink);

    let result = match fill_config_defaults::<CopyConfig>(&context, supplied, inputs) {
        Ok(resolved) => {
            for warning in &resolved.warnings {
                logger.warn(warning.to_string());
            }
            CopyTask::new(resolved.config).execute(&context).await
        }
        Err(e) => Err(e.into()),
    };

    match &result {
        Ok(_) => logger.finish(),
        Err(e) => logger.fail(e.to_string()),
    }
    result
}

/// Re-run the copy after a file change, limited to entries containing `path`.
///
/// Uses the resolved config with nothing supplied and reports nothing.
pub async fn copy_update(
    _event: ChangeEvent,
    path: &Path,
    context: &BuildContext,
    _options: &BuildOptions,
    inputs: &ConfigInputs,
) -> BuildResult<CopyStats> {
    CopyTask::resolve(context, None, inputs)?
        .execute_for(context, path)
        .await
}

async fn run_jobs(jobs: Vec<CopyJob>) -> BuildResult<CopyStats> {
    let handles: Vec<(CopyJob, JoinHandle<std::io::Result<CopyStats>>)> = jobs
        .into_iter()
        .map(|job| {
            let (src, dest, filter) = (job.src.clone(), job.dest.clone(), job.filter.clone());
            let handle = tokio::task::spawn_blocking(move || copy_path(&src, &dest, &filter));
            (job, handle)
        })
        .collect();

    // Every handle is awaited, even after a failure.
    let mut total = CopyStats::default();
    let mut first_error = None;
    for (job, handle) in handles {
        let outcome = match handle.await {
            Ok(Ok(stats)) => Ok(stats),
            Ok(Err(e)) if is_benign(&e) => Ok(CopyStats::default()),
            Ok(Err(e)) => Err(BuildError::Copy {
                src: job.src,
                dest: job.dest,
                message: e.to_string(),
            }),
            Err(e) => Err(BuildError::Join {
                task: "copy".to_string(),
                message: e.to_string(),
            }),
        };

        match outcome {
            Ok(stats) => {
                total.files += stats.files;
                total.dirs += stats.dirs;
            }
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(total),
    }
}
