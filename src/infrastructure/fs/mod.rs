//! File System Implementations

mod copy;

pub use copy::{copy_path, is_benign, CopyStats};
