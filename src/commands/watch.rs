//! Watch command handler

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use stagehand::application::{build_chain, build_with};
use stagehand::domain::value_objects::{generate_build_options, BuildMode, OptionsSpec};
use stagehand::watcher::WatchSession;

use super::Invocation;

/// Execute the watch command. Runs until Ctrl+C.
pub async fn cmd_watch(invocation: &Invocation) -> Result<bool> {
    let options = generate_build_options(OptionsSpec {
        is_watch: Some(true),
        ..OptionsSpec::dev()
    });

    let toolchain = match invocation.toolchain(build_chain(BuildMode::Dev)) {
        Ok(toolchain) => toolchain,
        Err(e) => {
            // Reported as the failure of the initial dev build
            let _ = build_with(
                invocation.spec(),
                options.into(),
                |_| Err(e),
                Arc::clone(&invocation.sink),
            )
            .await;
            return Ok(false);
        }
    };

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    let session = WatchSession::new(
        invocation.context.clone(),
        options,
        toolchain,
        invocation.inputs.clone(),
        Arc::clone(&invocation.sink),
    );
    session.run(running).await?;
    Ok(true)
}
