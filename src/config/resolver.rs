//! Configuration resolution
//!
//! Merges the layers a task's configuration can come from, lowest first:
//!
//! 1. Built-in defaults (`TaskConfig::DEFAULTS`)
//! 2. Project file `<root>/<default_config_filename>`
//! 3. File named by the task's environment variable
//! 4. File named by the task's CLI flag
//! 5. Table supplied by the caller
//!
//! Layers merge by top-level key: a key present in a higher layer replaces the
//! whole value from lower layers. Nothing is cached between calls.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{replace_path_vars, BuildContext};
use crate::error::ConfigError;

use super::inputs::ConfigInputs;
use super::loader::{decode_with_warnings, load_table, parse_table, ConfigWarning};
use super::task_info::TaskConfig;

/// Origin of one merged layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLayer {
    Default,
    Env(PathBuf),
    Cli(PathBuf),
    File(PathBuf),
    Supplied,
}

/// A typed config plus the provenance of its layers
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig<T> {
    pub config: T,
    pub layers: Vec<ConfigLayer>,
    pub warnings: Vec<ConfigWarning>,
}

/// Resolve a task's configuration from every source.
pub fn fill_config_defaults<T: TaskConfig>(
    context: &BuildContext,
    supplied: Option<&toml::Table>,
    inputs: &ConfigInputs,
) -> Result<ResolvedConfig<T>, ConfigError> {
    let (merged, layers) = merge_layers::<T>(context, supplied, inputs)?;
    let (config, warnings) = decode_with_warnings::<T>(merged)?;

    Ok(ResolvedConfig {
        config,
        layers,
        warnings,
    })
}

/// Merge every available layer into one table.
pub fn merge_layers<T: TaskConfig>(
    context: &BuildContext,
    supplied: Option<&toml::Table>,
    inputs: &ConfigInputs,
) -> Result<(toml::Table, Vec<ConfigLayer>), ConfigError> {
    let info = T::INFO;
    let mut merged = parse_table(T::DEFAULTS, info.task, None)?;
    let mut layers = vec![ConfigLayer::Default];

    let project_file = context.resolve(info.default_config_filename);
    if project_file.is_file() {
        overlay(&mut merged, load_table(&project_file, info.task)?);
        layers.push(ConfigLayer::File(project_file));
    }

    if let Some(value) = inputs.env_value(&info) {
        let path = named_file(context, &value, info.env_var)?;
        overlay(&mut merged, load_table(&path, info.task)?);
        layers.push(ConfigLayer::Env(path));
    }

    if let Some(value) = inputs.arg_value(&info)? {
        let path = named_file(context, &value, info.full_arg)?;
        overlay(&mut merged, load_table(&path, info.task)?);
        layers.push(ConfigLayer::Cli(path));
    }

    if let Some(table) = supplied {
        overlay(&mut merged, table.clone());
        layers.push(ConfigLayer::Supplied);
    }

    Ok((merged, layers))
}

/// Convert a typed (possibly complete) config into a supplied layer.
pub fn supplied_table<S: Serialize>(task: &str, config: &S) -> Result<toml::Table, ConfigError> {
    match toml::Value::try_from(config) {
        Ok(toml::Value::Table(table)) => Ok(table),
        Ok(_) => Err(ConfigError::Invalid {
            task: task.to_string(),
            path: None,
            message: "supplied config must be a table".to_string(),
        }),
        Err(e) => Err(ConfigError::Invalid {
            task: task.to_string(),
            path: None,
            message: e.to_string(),
        }),
    }
}

fn overlay(base: &mut toml::Table, layer: toml::Table) {
    for (key, value) in layer {
        base.insert(key, value);
    }
}

fn named_file(context: &BuildContext, value: &str, origin: &str) -> Result<PathBuf, ConfigError> {
    let path = context.resolve(replace_path_vars(context, value));
    if path.is_file() {
        Ok(path)
    } else {
        Err(ConfigError::FileNotFound {
            path,
            origin: origin.to_string(),
        })
    }
}
