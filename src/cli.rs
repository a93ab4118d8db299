// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every flag is optional: a bare `podfeed` reads `feed.yaml` and writes
//! `podcast.xml` in the current working directory.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{default_input_path, default_output_path};

/// Command-line arguments for `podfeed`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "podfeed",
    version,
    about = "Generate a podcast RSS feed from a YAML description.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the feed description (YAML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_input_path())]
    pub input: PathBuf,

    /// Path of the generated RSS file. Overwritten if it exists.
    #[arg(long, value_name = "PATH", default_value_os_t = default_output_path())]
    pub output: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PODFEED_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and validate, print a summary, but don't write the feed.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
