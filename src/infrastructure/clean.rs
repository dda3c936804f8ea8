//! Output root cleaner

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::ports::{Cleaner, StageResult};
use crate::domain::value_objects::BuildContext;
use crate::error::StageError;

/// Empties `www_dir`, creating it when missing. The directory itself is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCleaner;

impl OutputCleaner {
    pub fn new() -> Self {
        Self
    }
}

impl Cleaner for OutputCleaner {
    fn clean(&self, context: &BuildContext) -> StageResult {
        empty_dir(&context.www_dir).map_err(|e| {
            StageError::new(
                "clean",
                format!("could not empty {}: {e}", context.www_dir.display()),
            )
        })
    }
}

fn empty_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        return fs::create_dir_all(dir);
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
