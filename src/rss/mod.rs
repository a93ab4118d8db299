// src/rss/mod.rs

//! RSS output: an immutable element tree (`document.rs`) and its XML
//! serialization (`writer.rs`).

pub mod document;
pub mod writer;

pub use document::{
    CONTENT_NS, Document, ENCLOSURE_MIME, Element, ITUNES_NS, RSS_VERSION, build_document,
};
pub use writer::{to_xml, write_document, write_xml};
