//! Assertion macros for CLI and scenario tests.
//!
//! Failures print the project tree or the captured output.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
#[allow(dead_code)]
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a file exists relative to the project root.
///
/// # Example
/// ```ignore
/// assert_copied!(env, "www/index.html");
/// ```
#[macro_export]
macro_rules! assert_copied {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            full_path.is_file(),
            "Expected file at '{}', but it doesn't exist.\n\
             Project root: {:?}\n\
             Files found:\n  {}",
            $path,
            $env.project_root.path(),
            $crate::common::list_all_files($env.project_root.path()).join("\n  ")
        );
    };
}

/// Assert that a path does not exist.
#[macro_export]
macro_rules! assert_not_copied {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist, but it does.\n\
             Project root: {:?}",
            $path,
            $env.project_root.path()
        );
    };
}

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "build prod finished");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that output does NOT contain a pattern.
#[macro_export]
macro_rules! assert_output_not_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            !$result.stdout.contains($pattern) && !$result.stderr.contains($pattern),
            "Expected output to NOT contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}
