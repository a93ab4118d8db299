// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod rss;

use std::path::Path;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::FeedConfig;
use crate::errors::Result;
use crate::rss::{build_document, write_document};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub episodes: usize,
}

/// Read `input`, validate it, build the RSS tree and write it to `output`.
///
/// Nothing is written unless loading, validation and building all succeed,
/// so a bad input leaves any existing `output` untouched.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ConversionSummary> {
    let cfg = load_and_validate(input)?;
    let doc = build_document(&cfg);
    write_document(&doc, output)?;

    Ok(ConversionSummary {
        episodes: cfg.items.len(),
    })
}

/// High-level entry point used by `main.rs`.
pub fn run(args: CliArgs) -> Result<()> {
    info!(input = ?args.input, output = ?args.output, "starting conversion");

    if args.dry_run {
        let cfg = load_and_validate(&args.input)?;
        print_dry_run(&cfg);
        return Ok(());
    }

    let summary = convert(&args.input, &args.output)?;
    debug!(episodes = summary.episodes, "conversion complete");
    println!("Successfully generated '{}'", args.output.display());
    Ok(())
}

/// Simple dry-run output: print the channel fields and episode list.
fn print_dry_run(cfg: &FeedConfig) {
    println!("podfeed dry-run");
    println!("  link = {}", cfg.link);
    println!("  title = {}", cfg.title);
    println!("  author = {}", cfg.author);
    println!("  language = {}", cfg.language);
    println!("  category = {}", cfg.category);
    println!("  image = {}{}", cfg.link, cfg.image);
    println!();

    println!("items ({}):", cfg.items.len());
    for (i, item) in cfg.items.iter().enumerate() {
        println!("  {}. {}", i + 1, item.title);
        println!("      published: {}", item.published);
        println!("      duration: {}", item.duration);
        println!("      enclosure: {}{} ({} bytes)", cfg.link, item.file, item.length);
    }

    debug!("dry-run complete (nothing written)");
}
