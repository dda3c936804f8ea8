//! Reusable config content

/// One stage table that appends `line` to `{{TMP}}/order.log`
fn recording_stage(name: &str, line: &str, update_line: Option<&str>) -> String {
    let script = |line: &str| format!("mkdir -p \\\"$0\\\" && echo \\\"{line}\\\" >> \\\"$0/order.log\\\"");
    let mut table = format!(
        "[{name}]\ncommand = \"sh\"\nargs = [\"-c\", \"{}\", \"{{{{TMP}}}}\"]\n",
        script(line)
    );
    if let Some(update_line) = update_line {
        table.push_str(&format!(
            "update_args = [\"-c\", \"{}\", \"{{{{TMP}}}}\"]\n",
            script(update_line)
        ));
    }
    table
}

/// Stages that succeed and record their order in `{{TMP}}/order.log`,
/// leaving out the ones named in `except`.
#[allow(dead_code)]
pub fn recording_stages(except: &[&str]) -> String {
    let stages = [
        ("compile", "compile", None),
        ("compile_aot", "compile_aot", None),
        ("bundle", "bundle", Some("bundle $STAGEHAND_EVENT")),
        ("style", "style", Some("style $STAGEHAND_EVENT")),
        ("minify", "minify $STAGEHAND_MODE", None),
    ];
    stages
        .iter()
        .filter(|(name, _, _)| !except.contains(name))
        .map(|(name, line, update)| recording_stage(name, line, *update))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A stage table whose command fails with a diagnostic on stderr
#[allow(dead_code)]
pub fn failing_stage(name: &str, message: &str) -> String {
    format!("[{name}]\ncommand = \"sh\"\nargs = [\"-c\", \"echo '{message}' >&2; exit 1\"]\n")
}
