//! Copy task configuration

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TokenPolicy;

use super::task_info::{TaskConfig, TaskInfo};

pub const COPY_TASK_INFO: TaskInfo = TaskInfo {
    task: "copy",
    context_property: "copy_config",
    full_arg: "--copy",
    short_arg: "-y",
    env_var: "STAGEHAND_COPY",
    default_config_filename: "copy.config.toml",
};

/// Resolved copy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyConfig {
    /// Reject unknown `{{TOKEN}}`s in src/dest instead of copying them literally
    #[serde(default)]
    pub strict_tokens: bool,

    pub include: Vec<CopyOptions>,
}

impl CopyConfig {
    pub fn token_policy(&self) -> TokenPolicy {
        if self.strict_tokens {
            TokenPolicy::Strict
        } else {
            TokenPolicy::Lenient
        }
    }
}

/// One `(src, dest, filter)` entry. Paths are templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyOptions {
    pub src: String,
    pub dest: String,
    #[serde(default, skip_serializing_if = "CopyFilter::is_empty")]
    pub filter: CopyFilter,
}

impl CopyOptions {
    pub fn new(src: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
            filter: CopyFilter::default(),
        }
    }

    pub fn with_filter<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = CopyFilter(patterns.into_iter().map(Into::into).collect());
        self
    }
}

/// Gitignore-style exclusion patterns, relative to the entry's source root.
///
/// A path matching the set is not copied; `!pattern` re-includes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CopyFilter(pub Vec<String>);

impl CopyFilter {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn patterns(&self) -> &[String] {
        &self.0
    }
}

impl TaskConfig for CopyConfig {
    const INFO: TaskInfo = COPY_TASK_INFO;

    const DEFAULTS: &'static str = r#"
[[include]]
src = "{{SRC}}/assets/"
dest = "{{WWW}}/assets/"

[[include]]
src = "{{SRC}}/index.html"
dest = "{{WWW}}/index.html"

[[include]]
src = "{{SRC}}/manifest.json"
dest = "{{WWW}}/manifest.json"

[[include]]
src = "{{SRC}}/service-worker.js"
dest = "{{WWW}}/service-worker.js"
"#;

    const REQUIRED: &'static [&'static str] = &["include"];

    const KNOWN_KEYS: &'static [&'static str] =
        &["include", "strict_tokens", "src", "dest", "filter"];
}
