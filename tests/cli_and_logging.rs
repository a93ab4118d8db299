use std::path::PathBuf;

use clap::Parser;
use podfeed::cli::{CliArgs, LogLevel};
use podfeed::logging::resolve_level;

#[test]
fn no_arguments_uses_fixed_file_names() {
    let args = CliArgs::try_parse_from(["podfeed"]).unwrap();

    assert_eq!(args.input, PathBuf::from("feed.yaml"));
    assert_eq!(args.output, PathBuf::from("podcast.xml"));
    assert!(args.log_level.is_none());
    assert!(!args.dry_run);
}

#[test]
fn paths_and_flags_can_be_overridden() {
    let args = CliArgs::try_parse_from([
        "podfeed",
        "--input",
        "shows/weekly.yaml",
        "--output",
        "public/weekly.xml",
        "--log-level",
        "debug",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.input, PathBuf::from("shows/weekly.yaml"));
    assert_eq!(args.output, PathBuf::from("public/weekly.xml"));
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    assert!(args.dry_run);
}

#[test]
fn positional_arguments_are_rejected() {
    assert!(CliArgs::try_parse_from(["podfeed", "feed.yaml"]).is_err());
}

#[test]
fn cli_level_beats_environment() {
    assert_eq!(
        resolve_level(Some(LogLevel::Warn), Some("trace")),
        tracing::Level::WARN
    );
}

#[test]
fn environment_level_is_parsed_leniently() {
    assert_eq!(resolve_level(None, Some(" DEBUG ")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some("warning")), tracing::Level::WARN);
}

#[test]
fn unknown_or_missing_level_defaults_to_info() {
    assert_eq!(resolve_level(None, Some("loud")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}
