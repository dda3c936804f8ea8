//! Config file loading and typed decoding

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::task_info::TaskConfig;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Task whose config carried the key
    pub task: String,
    /// Dotted path of the unknown key (e.g. `include.0.fliter`)
    pub key: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown {} config key '{}'", self.task, self.key)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Read a TOML config file into a table.
pub fn load_table(path: &Path, task: &str) -> Result<toml::Table, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_table(&content, task, Some(path.to_path_buf()))
}

/// Parse TOML source into a table.
pub fn parse_table(
    content: &str,
    task: &str,
    path: Option<PathBuf>,
) -> Result<toml::Table, ConfigError> {
    content
        .parse::<toml::Table>()
        .map_err(|e| ConfigError::Invalid {
            task: task.to_string(),
            path,
            message: e.message().to_string(),
        })
}

/// Decode a merged table, collecting unknown keys as warnings.
pub fn decode_with_warnings<T: TaskConfig>(
    table: toml::Table,
) -> Result<(T, Vec<ConfigWarning>), ConfigError> {
    let task = T::INFO.task;

    for field in T::REQUIRED {
        if !table.contains_key(*field) {
            return Err(ConfigError::MissingField {
                task: task.to_string(),
                field: (*field).to_string(),
            });
        }
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let config: T = serde_ignored::deserialize(toml::Value::Table(table), |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        task: task.to_string(),
        path: None,
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let leaf = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                task: task.to_string(),
                suggestion: suggest_key(&leaf, T::KNOWN_KEYS),
                key: path_str,
            }
        })
        .collect();

    Ok((config, warnings))
}

fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
