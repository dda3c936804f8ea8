//! In-process stages for scenario tests

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use stagehand::application::{CopyTask, Toolchain};
use stagehand::domain::ports::{Stage, StageFuture};
use stagehand::domain::value_objects::{BuildContext, BuildOptions, ChangeEvent, StageKind};
use stagehand::infrastructure::OutputCleaner;
use stagehand::{CopyConfig, StageError};

/// Shared order log
#[derive(Clone, Default)]
pub struct Order(Arc<Mutex<Vec<String>>>);

impl Order {
    pub fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// A stage that records itself and optionally fails
pub struct InProcessStage {
    name: String,
    order: Order,
    failure: Option<String>,
    delay: Duration,
}

impl InProcessStage {
    pub fn ok(name: &str, order: &Order) -> Self {
        Self {
            name: name.to_string(),
            order: order.clone(),
            failure: None,
            delay: Duration::from_millis(2),
        }
    }

    pub fn failing(name: &str, order: &Order, message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::ok(name, order)
        }
    }

    fn settle(&self, entry: String) -> StageFuture<'_> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            self.order.push(entry);
            match &self.failure {
                Some(message) => Err(StageError::new(self.name.as_str(), message.as_str())),
                None => Ok(()),
            }
        })
    }
}

impl Stage for InProcessStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn run<'a>(&'a self, _: &'a BuildContext, options: &'a BuildOptions) -> StageFuture<'a> {
        self.settle(format!("{}:{}", self.name, options.mode().as_str()))
    }

    fn run_update<'a>(
        &'a self,
        event: ChangeEvent,
        path: &'a Path,
        _: &'a BuildContext,
        _: &'a BuildOptions,
    ) -> StageFuture<'a> {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.settle(format!("{}:{event}:{file}", self.name))
    }
}

/// Every stage in-process, the real cleaner, and a real copy task
pub fn toolchain(order: &Order, copy: CopyConfig) -> Toolchain {
    toolchain_failing(order, copy, None)
}

/// As [`toolchain`], with one stage failing with a message
pub fn toolchain_failing(
    order: &Order,
    copy: CopyConfig,
    failing: Option<(StageKind, &str)>,
) -> Toolchain {
    let mut toolchain = Toolchain::new(Arc::new(OutputCleaner::new()), Arc::new(CopyTask::new(copy)));
    for kind in StageKind::ALL {
        let stage = match failing {
            Some((failing_kind, message)) if failing_kind == kind => {
                InProcessStage::failing(kind.key(), order, message)
            }
            _ => InProcessStage::ok(kind.key(), order),
        };
        toolchain = toolchain.with_stage(kind, Arc::new(stage));
    }
    toolchain
}
