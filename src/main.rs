//! Stagehand CLI - front-end build pipeline scheduler
//!
//! Usage: stagehand [OPTIONS] <COMMAND>
//!
//! Commands:
//!   build   Clean, copy, compile, bundle and style (and minify with --prod)
//!   copy    Copy assets into the output root
//!   update  Re-run bundle and style for one changed file
//!   watch   Build, then rebuild on every source change
//!   paths   Print a path template with its tokens substituted

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Stages run cooperatively on one thread; copies use the blocking pool.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(commands::dispatch(cli))
}
