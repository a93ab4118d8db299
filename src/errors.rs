// src/errors.rs

//! Crate-wide error type.
//!
//! Every variant is terminal: the binary prints it and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("config file {path:?} not found")]
    ConfigNotFound { path: PathBuf },

    #[error("error parsing {path:?}: {details}")]
    ConfigParse { path: PathBuf, details: String },

    #[error("unexpected error while loading {path:?}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing or empty required top-level key '{0}'")]
    MissingField(String),

    #[error("'item' must be a non-empty list")]
    InvalidItemList,

    #[error("missing or empty required key '{key}' in item {index}")]
    MissingEpisodeField { key: String, index: usize },

    #[error("item {0} must be a mapping")]
    InvalidEpisode(usize),

    #[error("item {index} could not be read: {details}")]
    MalformedEpisode { index: usize, details: String },

    #[error("top-level key '{0}' must be a scalar value")]
    InvalidFieldType(String),

    #[error("key '{key}' in item {index} must be a scalar value")]
    InvalidEpisodeFieldType { key: String, index: usize },

    #[error("error writing XML to {path:?}: {details}")]
    Serialization { path: PathBuf, details: String },
}

pub type Result<T> = std::result::Result<T, FeedError>;
