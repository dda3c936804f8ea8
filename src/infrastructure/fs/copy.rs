//! Filesystem copy engine
//!
//! Copies one `(src, dest)` pair: a single file, or a directory tree walked
//! with the `ignore` crate. Blocking; callers run it on the blocking pool.

use std::fs;
use std::io;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;

use crate::config::CopyFilter;

/// What one copy wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
}

/// Errors the copy task tolerates: a missing source, or a destination that
/// already exists.
pub fn is_benign(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::AlreadyExists
    )
}

/// Copy `src` to `dest`, skipping paths matched by `filter`.
///
/// A directory source copies its contents into `dest`. Existing files are
/// overwritten; missing parent directories are created.
pub fn copy_path(src: &Path, dest: &Path, filter: &CopyFilter) -> io::Result<CopyStats> {
    let root = if src.is_dir() {
        src
    } else {
        src.parent().unwrap_or(src)
    };
    let matcher = build_matcher(root, filter)?;

    let metadata = fs::metadata(src)?;
    if metadata.is_dir() {
        return copy_dir(src, dest, matcher);
    }

    let excluded = src
        .file_name()
        .is_some_and(|name| matcher.matched(Path::new(name), false).is_ignore());
    if excluded {
        return Ok(CopyStats::default());
    }

    copy_file(src, dest)?;
    Ok(CopyStats { files: 1, dirs: 0 })
}

fn copy_dir(src: &Path, dest: &Path, matcher: Gitignore) -> io::Result<CopyStats> {
    if is_inside(dest, src) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot copy a directory into itself",
        ));
    }
    fs::create_dir_all(dest)?;
    let mut stats = CopyStats { files: 0, dirs: 1 };

    let root = src.to_path_buf();
    let walker = WalkBuilder::new(src)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            match entry.path().strip_prefix(&root) {
                Ok(rel) if !rel.as_os_str().is_empty() => !matcher
                    .matched_path_or_any_parents(rel, is_dir)
                    .is_ignore(),
                _ => true,
            }
        })
        .build();

    for entry in walker {
        let entry = entry.map_err(walk_error)?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            continue;
        }

        let target = dest.join(rel);
        if entry.file_type().is_some_and(|t| t.is_dir()) {
            fs::create_dir_all(&target)?;
            stats.dirs += 1;
        } else {
            copy_file(entry.path(), &target)?;
            stats.files += 1;
        }
    }

    Ok(stats)
}

/// Whether `dest` is `src` or lies below it, lexically or once resolved.
fn is_inside(dest: &Path, src: &Path) -> bool {
    if dest.starts_with(src) {
        return true;
    }
    let Ok(src) = src.canonicalize() else {
        return false;
    };
    // `dest` may not exist yet; resolve its nearest existing ancestor
    let mut existing = dest;
    let mut rest = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name);
                existing = parent;
            }
            _ => return false,
        }
    }
    let Ok(mut resolved) = existing.canonicalize() else {
        return false;
    };
    resolved.extend(rest.iter().rev());
    resolved.starts_with(src)
}

fn copy_file(src: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest)?;
    Ok(())
}

fn build_matcher(root: &Path, filter: &CopyFilter) -> io::Result<Gitignore> {
    let mut builder = GitignoreBuilder::new(root);
    for pattern in filter.patterns() {
        builder.add_line(None, pattern).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid filter pattern '{pattern}': {e}"),
            )
        })?;
    }
    builder
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))
}

fn walk_error(err: ignore::Error) -> io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other(message))
}
