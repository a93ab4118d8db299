// src/config/loader.rs

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, info};

use crate::config::model::{FeedConfig, RawFeedConfig};
use crate::errors::{FeedError, Result};

/// Load a feed document from a given path and return the raw `RawFeedConfig`.
///
/// This only performs YAML deserialization; it does **not** check required
/// keys. Use [`load_and_validate`] for that.
///
/// An empty document is read as an empty mapping, so it fails validation on
/// the first required key rather than here.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawFeedConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FeedError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => FeedError::ConfigLoad {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    debug!(?path, bytes = contents.len(), "read feed document");

    let parse_error = |details: String| FeedError::ConfigParse {
        path: path.to_path_buf(),
        details,
    };

    let document: Value = if contents.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
    };

    match document {
        Value::Null => Ok(RawFeedConfig::default()),
        Value::Mapping(mapping) => {
            RawFeedConfig::from_mapping(mapping).map_err(|e| parse_error(e.to_string()))
        }
        _ => Err(parse_error(
            "top-level document must be a mapping".to_string(),
        )),
    }
}

/// Load a feed document from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads YAML.
/// - Checks every required top-level key, then every episode in order.
/// - Coerces scalar values to text.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<FeedConfig> {
    let raw = load_from_path(&path)?;
    let config = FeedConfig::try_from(raw)?;
    info!(
        path = ?path.as_ref(),
        episodes = config.items.len(),
        "feed document validated"
    );
    Ok(config)
}

/// Input document read when no `--input` is given.
pub fn default_input_path() -> PathBuf {
    PathBuf::from("feed.yaml")
}

/// Output file written when no `--output` is given.
pub fn default_output_path() -> PathBuf {
    PathBuf::from("podcast.xml")
}
