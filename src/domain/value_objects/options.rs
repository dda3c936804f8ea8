//! Per-invocation build flags

use serde::{Deserialize, Serialize};

/// Which of the two fixed stage orderings a build follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Dev,
    Prod,
}

impl BuildMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Dev => "dev",
            BuildMode::Prod => "prod",
        }
    }
}

/// Resolved build options. Read-only for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
    pub is_prod: bool,
    pub is_watch: bool,
    pub source_maps: bool,
    pub minify: bool,
}

impl BuildOptions {
    pub fn mode(&self) -> BuildMode {
        if self.is_prod {
            BuildMode::Prod
        } else {
            BuildMode::Dev
        }
    }
}

/// Partial options; see [`generate_build_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsSpec {
    pub is_prod: Option<bool>,
    pub is_watch: Option<bool>,
    pub source_maps: Option<bool>,
    pub minify: Option<bool>,
}

impl OptionsSpec {
    pub fn prod() -> Self {
        Self {
            is_prod: Some(true),
            ..Self::default()
        }
    }

    pub fn dev() -> Self {
        Self {
            is_prod: Some(false),
            ..Self::default()
        }
    }
}

impl From<BuildOptions> for OptionsSpec {
    fn from(options: BuildOptions) -> Self {
        Self {
            is_prod: Some(options.is_prod),
            is_watch: Some(options.is_watch),
            source_maps: Some(options.source_maps),
            minify: Some(options.minify),
        }
    }
}

/// Fill unset flags. Source maps default on for dev builds, minification on
/// for production builds.
pub fn generate_build_options(spec: OptionsSpec) -> BuildOptions {
    let is_prod = spec.is_prod.unwrap_or(false);
    BuildOptions {
        is_prod,
        is_watch: spec.is_watch.unwrap_or(false),
        source_maps: spec.source_maps.unwrap_or(!is_prod),
        minify: spec.minify.unwrap_or(is_prod),
    }
}
