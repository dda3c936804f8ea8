//! Copy command handler

use std::sync::Arc;

use stagehand::application::copy;

use super::Invocation;

/// Execute the copy command. Config errors are reported by the copy task.
pub async fn cmd_copy(invocation: &Invocation) -> bool {
    copy(
        invocation.spec(),
        None,
        &invocation.inputs,
        Arc::clone(&invocation.sink),
    )
    .await
    .is_ok()
}
