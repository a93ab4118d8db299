// src/config/mod.rs

//! Feed document loading and validation.
//!
//! Responsibilities:
//! - Define the YAML-backed data model (`model.rs`).
//! - Load a feed document from disk (`loader.rs`).
//! - Check required keys and turn the raw view into `FeedConfig` (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_input_path, default_output_path, load_and_validate, load_from_path};
pub use model::{
    EPISODE_KEYS, EpisodeConfig, FeedConfig, RawEpisode, RawFeedConfig, TOP_LEVEL_KEYS,
};
pub use validate::{scalar_text, validate_episode, validate_top_level};
