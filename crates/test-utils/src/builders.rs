#![allow(dead_code)]

use podfeed::config::{FeedConfig, RawFeedConfig};
use serde_yaml::{Mapping, Value};

/// Builder for feed documents.
///
/// Holds the document as a YAML mapping so tests can drop keys, null them
/// out or give them odd types, then either write the YAML to disk or go
/// straight to `RawFeedConfig` / `FeedConfig`.
#[derive(Debug, Clone)]
pub struct FeedConfigBuilder {
    doc: Mapping,
    /// Entries of `item`; `None` once the key was removed or set explicitly.
    items: Option<Vec<Value>>,
}

impl FeedConfigBuilder {
    /// A complete feed with no episodes.
    pub fn new() -> Self {
        let mut doc = Mapping::new();
        for (key, value) in [
            ("link", "https://ex.com/"),
            ("format", "audio/mpeg"),
            ("title", "Test Podcast"),
            ("subtitle", "A podcast used in tests"),
            ("author", "Test Author"),
            ("description", "Episodes for testing"),
            ("image", "cover.jpg"),
            ("language", "en-us"),
            ("category", "Technology"),
        ] {
            doc.insert(key.into(), value.into());
        }
        Self {
            doc,
            items: Some(Vec::new()),
        }
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        if key == "item" {
            self.items = None;
        }
        self.doc.insert(key.into(), value.into());
        self
    }

    pub fn null(self, key: &str) -> Self {
        self.set(key, Value::Null)
    }

    /// Insert an entry under any YAML key, e.g. an integer.
    pub fn set_key(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.doc.insert(key.into(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        if key == "item" {
            self.items = None;
        }
        self.doc.remove(key);
        self
    }

    pub fn with_episode(self, episode: EpisodeBuilder) -> Self {
        self.with_raw_item(Value::Mapping(episode.ep))
    }

    /// Push an arbitrary `item` entry, e.g. a bare string.
    pub fn with_raw_item(mut self, item: impl Into<Value>) -> Self {
        self.items.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    /// Adds `n` numbered episodes (`ep1.mp3`, `ep2.mp3`, ...).
    pub fn with_numbered_episodes(mut self, n: usize) -> Self {
        for i in 1..=n {
            self = self.with_episode(EpisodeBuilder::numbered(i));
        }
        self
    }

    pub fn to_value(&self) -> Value {
        let mut doc = self.doc.clone();
        if let Some(items) = &self.items {
            doc.insert("item".into(), Value::Sequence(items.clone()));
        }
        Value::Mapping(doc)
    }

    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(&self.to_value()).expect("feed mapping serializes")
    }

    pub fn build_raw(&self) -> RawFeedConfig {
        match self.to_value() {
            Value::Mapping(mapping) => {
                RawFeedConfig::from_mapping(mapping).expect("feed mapping deserializes")
            }
            other => panic!("feed builder produced a non-mapping: {other:?}"),
        }
    }

    pub fn build(self) -> FeedConfig {
        FeedConfig::try_from(self.build_raw()).expect("Failed to build valid config from builder")
    }
}

impl Default for FeedConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single `item` entry.
#[derive(Debug, Clone)]
pub struct EpisodeBuilder {
    ep: Mapping,
}

impl EpisodeBuilder {
    pub fn new(title: &str, file: &str, length: u64) -> Self {
        let mut ep = Mapping::new();
        ep.insert("title".into(), title.into());
        ep.insert("description".into(), format!("About {title}").into());
        ep.insert("duration".into(), "00:10:00".into());
        ep.insert("published".into(), "Thu, 12 Jan 2023 18:00:00 GMT".into());
        ep.insert("file".into(), file.into());
        ep.insert("length".into(), Value::from(length));
        Self { ep }
    }

    pub fn numbered(i: usize) -> Self {
        Self::new(&format!("Episode {i}"), &format!("ep{i}.mp3"), 1000 * i as u64)
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.ep.insert(key.into(), value.into());
        self
    }

    pub fn null(self, key: &str) -> Self {
        self.set(key, Value::Null)
    }

    pub fn set_key(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.ep.insert(key.into(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.ep.remove(key);
        self
    }
}
