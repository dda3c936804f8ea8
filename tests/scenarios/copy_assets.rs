//! Scenario: Copy Assets
//!
//! Journey: A project lists assets, some of which do not exist yet.
//!
//! Steps:
//! 1. Three entries: a missing source, an existing destination, a plain file
//! 2. `copy` runs
//! 3. The copy succeeds; present sources land in the output root
//! 4. An entry that cannot be written fails the copy, naming both paths
//!
//! Success Criteria:
//! - Missing sources and existing destinations are not errors
//! - A single finished or failed report for the copy task

use std::sync::Arc;

use stagehand::config::ConfigInputs;
use stagehand::domain::value_objects::ContextSpec;
use stagehand::{copy, BuildError};

use crate::common::*;

fn supplied(content: &str) -> toml::Table {
    content.parse().expect("valid copy table")
}

/// SCENARIO: Benign failures are tolerated across entries
#[tokio::test]
async fn scenario_copy_tolerates_missing_and_existing() {
    let env = TestEnv::new();
    env.write_project_file("src/manifest.json", r#"{"name":"app"}"#);
    env.write_project_file("src/robots.txt", "User-agent: *");
    env.write_project_file("www/manifest.json", "{}");
    let sink = RecordingSink::new();

    let table = supplied(
        r#"
[[include]]
src = "{{SRC}}/service-worker.js"
dest = "{{WWW}}/service-worker.js"

[[include]]
src = "{{SRC}}/manifest.json"
dest = "{{WWW}}/manifest.json"

[[include]]
src = "{{SRC}}/robots.txt"
dest = "{{WWW}}/robots.txt"
"#,
    );

    let stats = copy(
        ContextSpec::rooted(env.root()),
        Some(&table),
        &ConfigInputs::empty(),
        Arc::new(sink.clone()),
    )
    .await
    .expect("benign failures do not fail the copy");

    assert_eq!(stats.files, 2);
    assert!(!env.project_path("www/service-worker.js").exists());
    assert_eq!(env.read_project_file("www/manifest.json"), r#"{"name":"app"}"#);
    assert_eq!(env.read_project_file("www/robots.txt"), "User-agent: *");
    assert_eq!(sink.outcomes_for("copy"), ["finish"]);
}

/// SCENARIO: A destination that cannot be written fails the copy
#[tokio::test]
async fn scenario_copy_reports_unwritable_destination() {
    let env = TestEnv::new();
    env.write_project_file("src/index.html", "<html></html>");
    env.write_project_file("src/robots.txt", "User-agent: *");
    // A directory where the copy needs to write a file
    std::fs::create_dir_all(env.project_path("www/index.html")).unwrap();
    let sink = RecordingSink::new();

    let table = supplied(
        r#"
[[include]]
src = "{{SRC}}/index.html"
dest = "{{WWW}}/index.html"

[[include]]
src = "{{SRC}}/robots.txt"
dest = "{{WWW}}/robots.txt"
"#,
    );

    let err = copy(
        ContextSpec::rooted(env.root()),
        Some(&table),
        &ConfigInputs::empty(),
        Arc::new(sink.clone()),
    )
    .await
    .expect_err("a non-benign failure fails the copy");

    let src = env.project_path("src/index.html");
    let dest = env.project_path("www/index.html");
    assert!(matches!(err, BuildError::Copy { .. }));
    let message = err.to_string();
    assert!(message.contains(&format!("\"{}\"", src.display())), "{message}");
    assert!(message.contains(&format!("\"{}\"", dest.display())), "{message}");

    // The other entry was still copied
    assert!(env.project_path("www/robots.txt").is_file());

    let outcomes = sink.outcomes_for("copy");
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].starts_with("fail: Error copying"));
}
