//! Full-build pipeline
//!
//! ```text
//! clean ──> compile ──> bundle ──> style [──> minify] ──> join copy
//!       └──> copy (spawned) ───────────────────────────────┘
//! ```
//!
//! Clean runs synchronously before anything else writes to the output root.
//! The copy task is spawned right after clean and joined at the end, on the
//! failure path too.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::ports::{BuildEventSink, StageResult};
use crate::domain::value_objects::{
    generate_build_options, generate_context, BuildContext, BuildOptions, ContextSpec,
    OptionsSpec, StageKind,
};
use crate::error::{BuildError, BuildResult};
use crate::logger::Logger;

use super::plan::build_chain;
use super::toolchain::Toolchain;

/// Run the production or development build and report it exactly once.
pub async fn build(
    context: ContextSpec,
    options: OptionsSpec,
    toolchain: &Toolchain,
    sink: Arc<dyn BuildEventSink>,
) -> BuildResult<()> {
    build_with(context, options, |_| Ok(toolchain.clone()), sink).await
}

/// Like `build`, but the toolchain is assembled after the build has been
/// reported as started. A setup error is reported as the build's failure.
pub async fn build_with<F>(
    context: ContextSpec,
    options: OptionsSpec,
    setup: F,
    sink: Arc<dyn BuildEventSink>,
) -> BuildResult<()>
where
    F: FnOnce(&BuildOptions) -> BuildResult<Toolchain>,
{
    let context = Arc::new(generate_context(context));
    let options = generate_build_options(options);
    let logger = Logger::new(format!("build {}", options.mode().as_str()), sink);

    let outcome = match setup(&options) {
        Ok(toolchain) => run_build(&context, options, &toolchain).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => {
            logger.finish();
            Ok(())
        }
        Err(e) => {
            let err = BuildError::Pipeline {
                pipeline: "Build".to_string(),
                message: e.reason(),
            };
            logger.fail(err.to_string());
            Err(err)
        }
    }
}

async fn run_build(
    context: &Arc<BuildContext>,
    options: BuildOptions,
    toolchain: &Toolchain,
) -> BuildResult<()> {
    let chain = build_chain(options.mode());
    toolchain.validate(chain)?;

    toolchain.cleaner().clean(context)?;

    let copy = toolchain.copy();
    let copy_context = Arc::clone(context);
    let copying = tokio::spawn(async move { copy.run(&copy_context, &options).await });

    let chained = run_chain(chain, toolchain, context, &options).await;
    let copied = join_copy(copying).await;
    chained.and(copied)
}

async fn run_chain(
    chain: &[StageKind],
    toolchain: &Toolchain,
    context: &BuildContext,
    options: &BuildOptions,
) -> BuildResult<()> {
    for &kind in chain {
        toolchain.stage(kind)?.run(context, options).await?;
    }
    Ok(())
}

async fn join_copy(handle: JoinHandle<StageResult>) -> BuildResult<()> {
    match handle.await {
        Ok(result) => result.map_err(BuildError::from),
        Err(e) => Err(BuildError::Join {
            task: "copy".to_string(),
            message: e.to_string(),
        }),
    }
}
