//! Build context value object
//!
//! The root directories every stage reads from or writes into. Built once per
//! top-level invocation and never mutated afterwards; derived paths are
//! computed through path substitution instead of being stored here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Fully-populated set of build roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildContext {
    /// Project root (holds the config files)
    pub root_dir: PathBuf,
    /// Application sources
    pub src_dir: PathBuf,
    /// Output root emptied by the cleaner
    pub www_dir: PathBuf,
    /// Bundle output, usually nested inside `www_dir`
    pub build_dir: PathBuf,
    /// Scratch space for intermediate artifacts
    pub tmp_dir: PathBuf,
}

/// Partial context; unset fields are filled by [`generate_context`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSpec {
    pub root_dir: Option<PathBuf>,
    pub src_dir: Option<PathBuf>,
    pub www_dir: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
    pub tmp_dir: Option<PathBuf>,
}

impl ContextSpec {
    /// Spec rooted at `root`, everything else defaulted.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: Some(root.into()),
            ..Self::default()
        }
    }
}

impl From<BuildContext> for ContextSpec {
    fn from(ctx: BuildContext) -> Self {
        Self {
            root_dir: Some(ctx.root_dir),
            src_dir: Some(ctx.src_dir),
            www_dir: Some(ctx.www_dir),
            build_dir: Some(ctx.build_dir),
            tmp_dir: Some(ctx.tmp_dir),
        }
    }
}

/// Fill every unset field with a default derived from the project root.
///
/// Calling this with a spec produced from a complete context returns that
/// context unchanged. Relative overrides are resolved against the root.
pub fn generate_context(spec: ContextSpec) -> BuildContext {
    let root_dir = spec
        .root_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let src_dir = under(&root_dir, spec.src_dir, "src");
    let www_dir = under(&root_dir, spec.www_dir, "www");
    let build_dir = match spec.build_dir {
        Some(dir) => anchor(&root_dir, dir),
        None => www_dir.join("build"),
    };
    let tmp_dir = under(&root_dir, spec.tmp_dir, ".tmp");

    BuildContext {
        root_dir,
        src_dir,
        www_dir,
        build_dir,
        tmp_dir,
    }
}

fn under(root: &Path, value: Option<PathBuf>, default: &str) -> PathBuf {
    match value {
        Some(dir) => anchor(root, dir),
        None => root.join(default),
    }
}

fn anchor(root: &Path, dir: PathBuf) -> PathBuf {
    if dir.is_absolute() {
        dir
    } else {
        root.join(dir)
    }
}

impl BuildContext {
    /// Resolve a path relative to the project root (absolute paths pass through).
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        anchor(&self.root_dir, path.as_ref().to_path_buf())
    }
}
