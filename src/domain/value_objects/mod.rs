//! Domain Value Objects
//!
//! Immutable types describing a build invocation.

pub mod change_event;
pub mod context;
pub mod options;
pub mod path_vars;
pub mod stage_kind;

pub use change_event::{ChangeEvent, UnknownChangeEvent};
pub use context::{generate_context, BuildContext, ContextSpec};
pub use options::{generate_build_options, BuildMode, BuildOptions, OptionsSpec};
pub use path_vars::{
    contains_path_vars, replace_path_vars, replace_path_vars_strict, substitute, TokenPolicy,
    PATH_TOKENS,
};
pub use stage_kind::StageKind;
