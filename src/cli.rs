use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stagehand::ChangeEvent;

/// Stagehand - front-end build pipeline scheduler
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Source root (defaults to <root>/src)
    #[arg(long, global = true, value_name = "DIR")]
    pub src: Option<PathBuf>,

    /// Output root emptied before a full build (defaults to <root>/www)
    #[arg(long, global = true, value_name = "DIR")]
    pub www: Option<PathBuf>,

    /// Scratch directory (defaults to <root>/.tmp)
    #[arg(long, global = true, value_name = "DIR")]
    pub tmp: Option<PathBuf>,

    /// Copy config file, overriding STAGEHAND_COPY
    #[arg(short = 'y', long = "copy", global = true, value_name = "FILE")]
    pub copy_config: Option<String>,

    /// Stages config file, overriding STAGEHAND_STAGES
    #[arg(short = 's', long = "stages", global = true, value_name = "FILE")]
    pub stages_config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean, copy, compile, bundle and style (and minify with --prod)
    Build {
        /// Production build: ahead-of-time compile and minify
        #[arg(long)]
        prod: bool,

        /// Ask the tools not to emit source maps (STAGEHAND_SOURCE_MAPS=false)
        #[arg(long)]
        no_sourcemaps: bool,

        /// Ask the tools to minify a development build (STAGEHAND_MINIFY=true)
        #[arg(long)]
        minify: bool,
    },

    /// Copy assets into the output root
    Copy,

    /// Re-run bundle and style for one changed file
    Update {
        /// add, change, unlink, addDir or unlinkDir
        event: ChangeEvent,

        /// The changed file
        path: PathBuf,

        /// Use production options
        #[arg(long)]
        prod: bool,
    },

    /// Build, then rebuild on every source change
    Watch,

    /// Print a path template with its tokens substituted (debugging)
    Paths {
        /// Template such as "{{WWW}}/build"
        template: String,

        /// Fail on unknown tokens instead of leaving them as-is
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    /// The config flags as the resolver reads them.
    pub fn config_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(path) = &self.copy_config {
            args.extend(["--copy".to_string(), path.clone()]);
        }
        if let Some(path) = &self.stages_config {
            args.extend(["--stages".to_string(), path.clone()]);
        }
        args
    }
}
