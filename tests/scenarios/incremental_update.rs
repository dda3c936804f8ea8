//! Scenario: Incremental Update
//!
//! Journey: While watching, a developer saves a component.
//!
//! Steps:
//! 1. A full development build has populated the output root
//! 2. `build_update` runs for the saved file
//! 3. Only bundle and style re-run, in that order
//! 4. A bundler error stops the update before style
//!
//! Success Criteria:
//! - Output from the full build is left alone
//! - The failure names the bundler's diagnostic

use std::sync::Arc;

use stagehand::domain::value_objects::{
    generate_build_options, generate_context, ChangeEvent, ContextSpec, OptionsSpec, StageKind,
};
use stagehand::{build_update, CopyConfig};

use crate::common::*;
use crate::support::{toolchain, toolchain_failing, Order};

fn no_assets() -> CopyConfig {
    CopyConfig {
        include: Vec::new(),
        strict_tokens: false,
    }
}

/// SCENARIO: A saved component re-runs bundle then style
#[tokio::test]
async fn scenario_saved_component_rebuilds_bundle_and_style() {
    let env = TestEnv::new();
    env.write_project_file("www/build/main.js", "bundled");
    let ctx = generate_context(ContextSpec::rooted(env.root()));
    let opts = generate_build_options(OptionsSpec {
        is_watch: Some(true),
        ..OptionsSpec::dev()
    });
    let order = Order::default();
    let sink = RecordingSink::new();

    build_update(
        ChangeEvent::Change,
        &ctx.src_dir.join("app.component.ts"),
        &ctx,
        &opts,
        &toolchain(&order, no_assets()),
        Arc::new(sink.clone()),
    )
    .await
    .unwrap();

    assert_eq!(
        order.entries(),
        [
            "bundle:change:app.component.ts",
            "style:change:app.component.ts"
        ]
    );
    assert_eq!(env.read_project_file("www/build/main.js"), "bundled");
    assert_eq!(sink.outcomes_for("buildUpdate"), ["finish"]);
}

/// SCENARIO: The bundler rejects the saved file
#[tokio::test]
async fn scenario_bundler_error_skips_style() {
    let env = TestEnv::new();
    let ctx = generate_context(ContextSpec::rooted(env.root()));
    let opts = generate_build_options(OptionsSpec::dev());
    let order = Order::default();
    let sink = RecordingSink::new();

    let result = build_update(
        ChangeEvent::Add,
        &ctx.src_dir.join("broken.ts"),
        &ctx,
        &opts,
        &toolchain_failing(&order, no_assets(), Some((StageKind::Bundle, "syntax error"))),
        Arc::new(sink.clone()),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(order.entries(), ["bundle:add:broken.ts"]);
    assert_eq!(
        sink.outcomes_for("buildUpdate"),
        ["fail: buildUpdate failed: syntax error"]
    );
}
