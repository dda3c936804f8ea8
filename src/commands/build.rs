//! Build command handler

use std::sync::Arc;

use stagehand::application::{build_chain, build_with};
use stagehand::domain::value_objects::OptionsSpec;

use super::Invocation;

/// Execute the build command. Returns whether the build succeeded.
///
/// Stage and copy configs are resolved inside the build, so a config error
/// is reported as the build's failure.
pub async fn cmd_build(
    invocation: &Invocation,
    prod: bool,
    no_sourcemaps: bool,
    minify: bool,
) -> bool {
    let spec = OptionsSpec {
        is_prod: Some(prod),
        source_maps: no_sourcemaps.then_some(false),
        minify: minify.then_some(true),
        ..OptionsSpec::default()
    };

    build_with(
        invocation.spec(),
        spec,
        |options| invocation.toolchain(build_chain(options.mode())),
        Arc::clone(&invocation.sink),
    )
    .await
    .is_ok()
}
