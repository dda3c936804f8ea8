//! Paths command handler

use anyhow::Result;

use stagehand::domain::value_objects::{replace_path_vars, replace_path_vars_strict};

use super::Invocation;

/// Print a substituted path template.
pub fn cmd_paths(invocation: &Invocation, template: &str, strict: bool) -> Result<bool> {
    let path = if strict {
        replace_path_vars_strict(&invocation.context, template)?
    } else {
        replace_path_vars(&invocation.context, template)
    };

    if invocation.json {
        let output = serde_json::json!({
            "event": "paths",
            "template": template,
            "path": path,
        });
        println!("{output}");
    } else {
        println!("{path}");
    }
    Ok(true)
}
