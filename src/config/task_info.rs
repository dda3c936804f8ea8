//! Static task descriptors

use serde::de::DeserializeOwned;

/// Where a task's configuration may come from.
///
/// One `const` per task type; read only by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskInfo {
    /// Task name used in error messages
    pub task: &'static str,
    /// Property under which the resolved config is known
    pub context_property: &'static str,
    /// Long CLI flag naming an alternate config file (`--copy`)
    pub full_arg: &'static str,
    /// Short CLI flag naming an alternate config file (`-y`)
    pub short_arg: &'static str,
    /// Environment variable naming an alternate config file
    pub env_var: &'static str,
    /// Project-level config file, relative to the project root
    pub default_config_filename: &'static str,
}

/// A task whose configuration goes through the resolver.
pub trait TaskConfig: DeserializeOwned {
    /// Static descriptor
    const INFO: TaskInfo;

    /// Built-in default layer, as TOML source.
    const DEFAULTS: &'static str;

    /// Top-level keys that must be present after merging.
    const REQUIRED: &'static [&'static str] = &[];

    /// Keys offered as "did you mean" suggestions for unknown keys.
    const KNOWN_KEYS: &'static [&'static str] = &[];
}
