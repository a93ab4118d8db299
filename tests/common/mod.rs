#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub use podfeed_test_utils::builders::{EpisodeBuilder, FeedConfigBuilder};
pub use podfeed_test_utils::init_tracing;

/// Write `yaml` as `feed.yaml` inside `dir` and return its path.
pub fn write_feed(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("feed.yaml");
    fs::write(&path, yaml).unwrap();
    path
}
