//! Application Layer
//!
//! Use cases that orchestrate stages. Nothing here knows how a stage does
//! its work; it only decides what runs, in what order, and what is joined.
//!
//! ## Use Cases
//!
//! - `build` - Full production or development build
//! - `build_update` - Bundle and style re-run for one changed file
//! - `copy` / `copy_update` - The asset copy task

mod build;
pub mod copy;
pub mod plan;
#[cfg(test)]
pub(crate) mod testing;
mod toolchain;
mod update;

pub use build::{build, build_with};
pub use copy::{copy, copy_update, CopyJob, CopyTask};
pub use plan::{build_chain, UPDATE_CHAIN};
pub use toolchain::Toolchain;
pub use update::{build_update, build_update_with};
