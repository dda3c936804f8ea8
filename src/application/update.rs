//! Incremental-update pipeline
//!
//! Re-runs bundle then style for one changed file. Clean, copy and compile are
//! left to the full build that populated the output root.

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::BuildEventSink;
use crate::domain::value_objects::{BuildContext, BuildOptions, ChangeEvent};
use crate::error::{BuildError, BuildResult};
use crate::logger::Logger;

use super::plan::UPDATE_CHAIN;
use super::toolchain::Toolchain;

pub async fn build_update(
    event: ChangeEvent,
    path: &Path,
    context: &BuildContext,
    options: &BuildOptions,
    toolchain: &Toolchain,
    sink: Arc<dyn BuildEventSink>,
) -> BuildResult<()> {
    build_update_with(
        event,
        path,
        context,
        options,
        || Ok(toolchain.clone()),
        sink,
    )
    .await
}

/// Like `build_update`, with the toolchain assembled after the update has
/// been reported as started.
pub async fn build_update_with<F>(
    event: ChangeEvent,
    path: &Path,
    context: &BuildContext,
    options: &BuildOptions,
    setup: F,
    sink: Arc<dyn BuildEventSink>,
) -> BuildResult<()>
where
    F: FnOnce() -> BuildResult<Toolchain>,
{
    let logger = Logger::new("buildUpdate", sink);

    let outcome = match setup() {
        Ok(toolchain) => run_update(event, path, context, options, &toolchain).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => {
            logger.finish();
            Ok(())
        }
        Err(e) => {
            let err = BuildError::Pipeline {
                pipeline: "buildUpdate".to_string(),
                message: e.reason(),
            };
            logger.fail(err.to_string());
            Err(err)
        }
    }
}

async fn run_update(
    event: ChangeEvent,
    path: &Path,
    context: &BuildContext,
    options: &BuildOptions,
    toolchain: &Toolchain,
) -> BuildResult<()> {
    toolchain.validate(&UPDATE_CHAIN)?;
    for kind in UPDATE_CHAIN {
        toolchain
            .stage(kind)?
            .run_update(event, path, context, options)
            .await?;
    }
    Ok(())
}
