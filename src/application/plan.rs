//! Fixed stage orderings
//!
//! Clean always runs first and copy runs beside the chain, so neither appears
//! here.

use crate::domain::value_objects::{BuildMode, StageKind};

const PROD_CHAIN: [StageKind; 4] = [
    StageKind::CompileAot,
    StageKind::Bundle,
    StageKind::Style,
    StageKind::Minify,
];

const DEV_CHAIN: [StageKind; 3] = [StageKind::Compile, StageKind::Bundle, StageKind::Style];

/// Stages re-run for a single file change, in order
pub const UPDATE_CHAIN: [StageKind; 2] = [StageKind::Bundle, StageKind::Style];

/// The ordered chain of a full build
pub fn build_chain(mode: BuildMode) -> &'static [StageKind] {
    match mode {
        BuildMode::Prod => &PROD_CHAIN,
        BuildMode::Dev => &DEV_CHAIN,
    }
}
