//! Captured CLI arguments and environment
//!
//! The resolver never reads process globals itself. Callers capture argv and
//! the environment once per invocation so that resolution is repeatable.

use std::collections::BTreeMap;

use crate::error::ConfigError;

use super::task_info::TaskInfo;

/// Process inputs consulted by the resolver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigInputs {
    args: Vec<String>,
    env: BTreeMap<String, String>,
}

impl ConfigInputs {
    /// No flags, no environment
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot of the running process
    pub fn from_process() -> Self {
        Self {
            args: std::env::args().skip(1).collect(),
            env: std::env::vars().collect(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Value of the task's long or short flag.
    ///
    /// Accepts `--flag value`, `--flag=value` and `-f value`. The last
    /// occurrence wins, matching usual CLI behavior.
    pub fn arg_value(&self, info: &TaskInfo) -> Result<Option<String>, ConfigError> {
        let mut found = None;
        let mut iter = self.args.iter();

        while let Some(arg) = iter.next() {
            if arg == "--" {
                break;
            }

            let flag = if arg == info.full_arg || arg == info.short_arg {
                arg.as_str()
            } else if let Some(value) = arg
                .strip_prefix(info.full_arg)
                .and_then(|rest| rest.strip_prefix('='))
            {
                found = Some(value.to_string());
                continue;
            } else {
                continue;
            };

            match iter.next() {
                Some(value) if !value.starts_with('-') => found = Some(value.clone()),
                _ => {
                    return Err(ConfigError::MissingFlagValue {
                        flag: flag.to_string(),
                    })
                }
            }
        }

        Ok(found)
    }

    /// Value of the task's environment variable, if set and non-empty.
    pub fn env_value(&self, info: &TaskInfo) -> Option<String> {
        self.env
            .get(info.env_var)
            .filter(|v| !v.trim().is_empty())
            .cloned()
    }
}
