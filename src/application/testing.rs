//! Scripted stages for pipeline tests

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::ports::{Cleaner, Stage, StageFuture, StageResult};
use crate::domain::value_objects::{BuildContext, BuildOptions, ChangeEvent};
use crate::error::StageError;

use super::toolchain::Toolchain;

/// Shared, ordered record of what ran
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

pub struct ScriptedStage {
    name: String,
    journal: Journal,
    failure: Option<StageError>,
    delay: Option<Duration>,
}

impl ScriptedStage {
    pub fn ok(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            journal: journal.clone(),
            failure: None,
            delay: None,
        }
    }

    pub fn failing(name: &str, journal: &Journal, message: Option<&str>) -> Self {
        Self {
            failure: Some(StageError {
                stage: name.to_string(),
                message: message.map(str::to_string),
            }),
            ..Self::ok(name, journal)
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn settle(&self, entry: String) -> StageResult {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.journal.push(entry);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl Stage for ScriptedStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn run<'a>(&'a self, _: &'a BuildContext, _: &'a BuildOptions) -> StageFuture<'a> {
        Box::pin(self.settle(self.name.clone()))
    }

    fn run_update<'a>(
        &'a self,
        event: ChangeEvent,
        path: &'a Path,
        _: &'a BuildContext,
        _: &'a BuildOptions,
    ) -> StageFuture<'a> {
        Box::pin(self.settle(format!("{}:{event}:{}", self.name, path.display())))
    }
}

pub struct ScriptedCleaner {
    journal: Journal,
    fail: bool,
}

impl ScriptedCleaner {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail: false,
        }
    }

    pub fn failing(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail: true,
        }
    }
}

impl Cleaner for ScriptedCleaner {
    fn clean(&self, _: &BuildContext) -> StageResult {
        self.journal.push("clean");
        if self.fail {
            Err(StageError::new("clean", "permission denied"))
        } else {
            Ok(())
        }
    }
}

/// Every stage succeeds; copy settles after `copy_delay`.
pub fn scripted_toolchain(journal: &Journal, copy_delay: Duration) -> Toolchain {
    use crate::domain::value_objects::StageKind;

    let copy = ScriptedStage::ok("copy", journal).delayed(copy_delay);
    StageKind::ALL.iter().fold(
        Toolchain::new(Arc::new(ScriptedCleaner::new(journal)), Arc::new(copy)),
        |toolchain, &kind| toolchain.with_stage(kind, Arc::new(ScriptedStage::ok(kind.key(), journal))),
    )
}
