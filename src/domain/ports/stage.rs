//! Stage port - the narrow contract every external build tool is driven through
//!
//! A stage takes the build context and options and settles exactly once.
//! Compile, bundle, style and minify are stages; so is the copy task when the
//! full-build pipeline runs it concurrently.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::domain::value_objects::{BuildContext, BuildOptions, ChangeEvent};
use crate::error::StageError;

/// Completion signal of a stage
pub type StageResult = Result<(), StageError>;

/// Boxed stage future, borrowing the context for its lifetime
pub type StageFuture<'a> = Pin<Box<dyn Future<Output = StageResult> + Send + 'a>>;

/// A discrete build step.
///
/// Implementations:
/// - `CommandStage` - runs a configured external tool
/// - `CopyTask` - the concurrent asset copy
/// - test doubles recording invocation order
pub trait Stage: Send + Sync {
    /// Name used in logs and failure messages
    fn name(&self) -> &str;

    /// Run the stage to completion.
    fn run<'a>(&'a self, context: &'a BuildContext, options: &'a BuildOptions) -> StageFuture<'a>;

    /// Incremental form, given the file that changed.
    ///
    /// Stages without an incremental mode fall back to a full run.
    fn run_update<'a>(
        &'a self,
        event: ChangeEvent,
        path: &'a Path,
        context: &'a BuildContext,
        options: &'a BuildOptions,
    ) -> StageFuture<'a> {
        let _ = (event, path);
        self.run(context, options)
    }
}

/// Synchronously empties the output root before anything writes into it.
pub trait Cleaner: Send + Sync {
    fn clean(&self, context: &BuildContext) -> StageResult;
}
