// src/config/validate.rs

use serde_yaml::Value;
use tracing::debug;

use crate::config::model::{
    EPISODE_KEYS, EpisodeConfig, FeedConfig, RawEpisode, RawFeedConfig, TOP_LEVEL_KEYS,
};
use crate::errors::{FeedError, Result};

impl TryFrom<RawFeedConfig> for FeedConfig {
    type Error = FeedError;

    fn try_from(mut raw: RawFeedConfig) -> std::result::Result<Self, Self::Error> {
        validate_top_level(&raw)?;

        let entries = match raw.item.take() {
            Some(Value::Sequence(entries)) => entries,
            _ => return Err(FeedError::InvalidItemList),
        };

        let mut items = Vec::with_capacity(entries.len());
        for (i, entry) in entries.into_iter().enumerate() {
            let index = i + 1;
            let episode = parse_episode(entry, index)?;
            validate_episode(&episode, index)?;
            items.push(EpisodeConfig {
                title: episode_text(&episode, "title", index)?,
                description: episode_text(&episode, "description", index)?,
                duration: episode_text(&episode, "duration", index)?,
                published: episode_text(&episode, "published", index)?,
                file: episode_text(&episode, "file", index)?,
                length: episode_text(&episode, "length", index)?,
            });
        }
        debug!(episodes = items.len(), "episodes validated");

        Ok(FeedConfig {
            link: top_level_text(&raw, "link")?,
            format: top_level_text(&raw, "format")?,
            title: top_level_text(&raw, "title")?,
            subtitle: top_level_text(&raw, "subtitle")?,
            author: top_level_text(&raw, "author")?,
            description: top_level_text(&raw, "description")?,
            image: top_level_text(&raw, "image")?,
            language: top_level_text(&raw, "language")?,
            category: top_level_text(&raw, "category")?,
            items,
        })
    }
}

/// Check the required top-level keys in order, stopping at the first one
/// that is absent or `null`, then check that `item` is a non-empty list.
///
/// Scalar types are checked afterwards, once every key is known to exist.
pub fn validate_top_level(cfg: &RawFeedConfig) -> Result<()> {
    for key in TOP_LEVEL_KEYS {
        if cfg.field(key).is_none() {
            return Err(FeedError::MissingField(key.to_string()));
        }
    }

    match cfg.item.as_ref() {
        Some(Value::Sequence(entries)) if !entries.is_empty() => {}
        _ => return Err(FeedError::InvalidItemList),
    }

    for key in TOP_LEVEL_KEYS.iter().filter(|k| **k != "item") {
        if cfg.field(key).and_then(scalar_text).is_none() {
            return Err(FeedError::InvalidFieldType(key.to_string()));
        }
    }

    Ok(())
}

/// Check one episode. `index` is 1-based and only used for error reporting.
pub fn validate_episode(episode: &RawEpisode, index: usize) -> Result<()> {
    for key in EPISODE_KEYS {
        if episode.field(key).is_none() {
            return Err(FeedError::MissingEpisodeField {
                key: key.to_string(),
                index,
            });
        }
    }

    for key in EPISODE_KEYS {
        if episode.field(key).and_then(scalar_text).is_none() {
            return Err(FeedError::InvalidEpisodeFieldType {
                key: key.to_string(),
                index,
            });
        }
    }

    Ok(())
}

/// Text form of a YAML scalar; `None` for null, sequences, mappings and
/// tagged values.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_episode(entry: Value, index: usize) -> Result<RawEpisode> {
    match entry {
        Value::Mapping(mapping) => {
            RawEpisode::from_mapping(mapping).map_err(|e| FeedError::MalformedEpisode {
                index,
                details: e.to_string(),
            })
        }
        _ => Err(FeedError::InvalidEpisode(index)),
    }
}

fn top_level_text(cfg: &RawFeedConfig, key: &str) -> Result<String> {
    cfg.field(key)
        .and_then(scalar_text)
        .ok_or_else(|| FeedError::InvalidFieldType(key.to_string()))
}

fn episode_text(episode: &RawEpisode, key: &str, index: usize) -> Result<String> {
    episode
        .field(key)
        .and_then(scalar_text)
        .ok_or_else(|| FeedError::InvalidEpisodeFieldType {
            key: key.to_string(),
            index,
        })
}
