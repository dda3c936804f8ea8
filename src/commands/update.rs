//! Update command handler

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use stagehand::application::{build_update_with, UPDATE_CHAIN};
use stagehand::domain::value_objects::{generate_build_options, ChangeEvent, OptionsSpec};

use super::Invocation;

/// Execute the update command. Returns whether bundle and style succeeded.
pub async fn cmd_update(
    invocation: &Invocation,
    event: ChangeEvent,
    path: &Path,
    prod: bool,
) -> Result<bool> {
    let options = generate_build_options(OptionsSpec {
        is_prod: Some(prod),
        ..OptionsSpec::default()
    });
    let path = invocation.absolute(path)?;

    Ok(build_update_with(
        event,
        &path,
        &invocation.context,
        &options,
        || invocation.toolchain(&UPDATE_CHAIN),
        Arc::clone(&invocation.sink),
    )
    .await
    .is_ok())
}
