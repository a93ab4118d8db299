// src/config/model.rs

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// Required top-level keys, in the order they are checked.
pub const TOP_LEVEL_KEYS: [&str; 10] = [
    "link",
    "format",
    "title",
    "subtitle",
    "author",
    "description",
    "image",
    "language",
    "category",
    "item",
];

/// Required keys of every entry in `item`, in the order they are checked.
pub const EPISODE_KEYS: [&str; 6] = [
    "title",
    "description",
    "duration",
    "published",
    "file",
    "length",
];

/// Feed document as read from YAML, before any validation.
///
/// ```yaml
/// link: https://example.com/
/// format: audio/mpeg
/// title: My Podcast
/// subtitle: Weekly talk
/// author: Jane Doe
/// description: All about things
/// image: cover.jpg
/// language: en-us
/// category: Technology
/// item:
///   - title: Episode 1
///     description: The first one
///     duration: "00:32:10"
///     published: Thu, 12 Jan 2023 18:00:00 GMT
///     file: audio/ep1.mp3
///     length: 12345
/// ```
///
/// Every key is optional here so that a missing key and an explicit `null`
/// both surface as `None`; [`FeedConfig`] is the checked counterpart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeedConfig {
    pub link: Option<Value>,
    pub format: Option<Value>,
    pub title: Option<Value>,
    pub subtitle: Option<Value>,
    pub author: Option<Value>,
    pub description: Option<Value>,
    pub image: Option<Value>,
    pub language: Option<Value>,
    pub category: Option<Value>,
    pub item: Option<Value>,
}

impl RawFeedConfig {
    /// Read the raw view out of a YAML mapping. Entries whose key is not a
    /// string can never name a required field and are dropped first.
    pub fn from_mapping(mapping: Mapping) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_value(Value::Mapping(string_keyed(mapping)))
    }

    /// Look up a top-level key by name. Unknown names yield `None`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match key {
            "link" => self.link.as_ref(),
            "format" => self.format.as_ref(),
            "title" => self.title.as_ref(),
            "subtitle" => self.subtitle.as_ref(),
            "author" => self.author.as_ref(),
            "description" => self.description.as_ref(),
            "image" => self.image.as_ref(),
            "language" => self.language.as_ref(),
            "category" => self.category.as_ref(),
            "item" => self.item.as_ref(),
            _ => None,
        }
    }
}

/// One entry of the `item` list, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEpisode {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub duration: Option<Value>,
    pub published: Option<Value>,
    pub file: Option<Value>,
    /// Numeric or string; written out as text either way.
    pub length: Option<Value>,
}

impl RawEpisode {
    pub fn from_mapping(mapping: Mapping) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_value(Value::Mapping(string_keyed(mapping)))
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        match key {
            "title" => self.title.as_ref(),
            "description" => self.description.as_ref(),
            "duration" => self.duration.as_ref(),
            "published" => self.published.as_ref(),
            "file" => self.file.as_ref(),
            "length" => self.length.as_ref(),
            _ => None,
        }
    }
}

fn string_keyed(mapping: Mapping) -> Mapping {
    mapping
        .into_iter()
        .filter(|(key, _)| key.is_string())
        .collect()
}

/// Validated feed configuration.
///
/// Built only through `TryFrom<RawFeedConfig>`, so every field is present
/// and `items` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Base URL; also the prefix for the image href and every enclosure url.
    pub link: String,
    pub format: String,
    pub title: String,
    pub subtitle: String,
    /// Used for the channel and for every episode.
    pub author: String,
    pub description: String,
    /// Appended verbatim to `link`.
    pub image: String,
    pub language: String,
    pub category: String,
    /// Episodes in input order.
    pub items: Vec<EpisodeConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeConfig {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub published: String,
    /// Appended verbatim to the feed `link`.
    pub file: String,
    pub length: String,
}
