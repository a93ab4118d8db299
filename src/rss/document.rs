// src/rss/document.rs

use tracing::debug;

use crate::config::model::{EpisodeConfig, FeedConfig};

pub const RSS_VERSION: &str = "2.0";
pub const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
pub const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

/// MIME type of every enclosure, regardless of the file extension.
pub const ENCLOSURE_MIME: &str = "audio/mpeg";

/// A single XML element: name, attributes in insertion order, optional text
/// and child elements.
///
/// Elements are assembled with the chained constructors below and are not
/// mutated once they are placed in a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Leaf element holding only text.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.children.extend(children);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of the first attribute called `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// True when the element is written as `<name ... />`.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }
}

/// A complete feed: the `rss` root and everything beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn channel(&self) -> Option<&Element> {
        self.root.child("channel")
    }

    /// All `item` elements of the channel, in feed order.
    pub fn items(&self) -> Vec<&Element> {
        self.channel()
            .map(|c| c.children_named("item").collect())
            .unwrap_or_default()
    }
}

/// Map a validated feed onto the RSS 2.0 + iTunes element tree.
///
/// Channel children, in order: `link`, `format`, `title`, `subtitle`,
/// `itunes:author`, `description`, `itunes:image`, `language`, `link`
/// (written a second time for compatibility with existing consumers),
/// `itunes:category`, then one `item` per episode.
pub fn build_document(cfg: &FeedConfig) -> Document {
    let channel = Element::new("channel")
        .with_child(Element::leaf("link", &cfg.link))
        .with_child(Element::leaf("format", &cfg.format))
        .with_child(Element::leaf("title", &cfg.title))
        .with_child(Element::leaf("subtitle", &cfg.subtitle))
        .with_child(Element::leaf("itunes:author", &cfg.author))
        .with_child(Element::leaf("description", &cfg.description))
        .with_child(
            Element::new("itunes:image").with_attr("href", format!("{}{}", cfg.link, cfg.image)),
        )
        .with_child(Element::leaf("language", &cfg.language))
        .with_child(Element::leaf("link", &cfg.link))
        .with_child(Element::new("itunes:category").with_attr("text", &cfg.category))
        .with_children(cfg.items.iter().map(|ep| build_item(cfg, ep)));

    let root = Element::new("rss")
        .with_attr("version", RSS_VERSION)
        .with_attr("xmlns:itunes", ITUNES_NS)
        .with_attr("xmlns:content", CONTENT_NS)
        .with_child(channel);

    debug!(items = cfg.items.len(), "built feed document");
    Document { root }
}

fn build_item(cfg: &FeedConfig, ep: &EpisodeConfig) -> Element {
    let enclosure = Element::new("enclosure")
        .with_attr("url", format!("{}{}", cfg.link, ep.file))
        .with_attr("type", ENCLOSURE_MIME)
        .with_attr("length", &ep.length);

    Element::new("item")
        .with_child(Element::leaf("title", &ep.title))
        .with_child(Element::leaf("itunes:author", &cfg.author))
        .with_child(Element::leaf("description", &ep.description))
        .with_child(Element::leaf("itunes:duration", &ep.duration))
        .with_child(Element::leaf("pubDate", &ep.published))
        .with_child(enclosure)
}
