//! The stages a pipeline drives
//!
//! A `Toolchain` maps each stage kind to its implementation, plus the cleaner
//! and the copy stage. Production wiring comes from the resolved stages
//! config; tests inject their own stages.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{StagesConfig, STAGES_TASK_INFO};
use crate::domain::ports::{Cleaner, Stage};
use crate::domain::value_objects::StageKind;
use crate::error::ConfigError;
use crate::infrastructure::{CommandStage, OutputCleaner};

#[derive(Clone)]
pub struct Toolchain {
    stages: HashMap<StageKind, Arc<dyn Stage>>,
    cleaner: Arc<dyn Cleaner>,
    copy: Arc<dyn Stage>,
}

impl Toolchain {
    pub fn new(cleaner: Arc<dyn Cleaner>, copy: Arc<dyn Stage>) -> Self {
        Self {
            stages: HashMap::new(),
            cleaner,
            copy,
        }
    }

    pub fn with_stage(mut self, kind: StageKind, stage: Arc<dyn Stage>) -> Self {
        self.stages.insert(kind, stage);
        self
    }

    /// Command stages for `kinds`, each of which must be configured.
    ///
    /// `quiet` discards the tools' own output.
    pub fn from_config(
        config: &StagesConfig,
        kinds: &[StageKind],
        copy: Arc<dyn Stage>,
        quiet: bool,
    ) -> Result<Self, ConfigError> {
        let mut toolchain = Self::new(Arc::new(OutputCleaner::new()), copy);
        for &kind in kinds {
            let stage = CommandStage::from_config(kind, config)?.quiet(quiet);
            toolchain = toolchain.with_stage(kind, Arc::new(stage));
        }
        Ok(toolchain)
    }

    pub fn stage(&self, kind: StageKind) -> Result<&Arc<dyn Stage>, ConfigError> {
        self.stages
            .get(&kind)
            .ok_or_else(|| ConfigError::MissingField {
                task: STAGES_TASK_INFO.task.to_string(),
                field: kind.key().to_string(),
            })
    }

    /// Fail unless every stage in `chain` is present.
    pub fn validate(&self, chain: &[StageKind]) -> Result<(), ConfigError> {
        chain.iter().try_for_each(|&kind| self.stage(kind).map(|_| ()))
    }

    pub fn cleaner(&self) -> &dyn Cleaner {
        self.cleaner.as_ref()
    }

    pub fn copy(&self) -> Arc<dyn Stage> {
        Arc::clone(&self.copy)
    }
}
