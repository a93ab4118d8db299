// src/rss/writer.rs

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::{debug, info};

use crate::errors::{FeedError, Result};
use crate::rss::document::{Document, Element};

/// Spaces per nesting level.
const INDENT: usize = 2;

/// Serialize `doc` into `sink` as UTF-8 XML with a leading declaration.
///
/// Text and attribute values are entity-escaped by quick-xml.
pub fn write_xml<W: Write>(doc: &Document, sink: W) -> io::Result<W> {
    let mut writer = Writer::new_with_indent(sink, b' ', INDENT);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(io::Error::other)?;
    write_element(&mut writer, doc.root())?;

    let mut sink = writer.into_inner();
    sink.write_all(b"\n")?;
    Ok(sink)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> io::Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(io::Error::other);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(io::Error::other)?;
    if let Some(text) = element.text() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(io::Error::other)?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(io::Error::other)
}

/// Serialize `doc` into an in-memory buffer.
pub fn to_xml(doc: &Document) -> io::Result<Vec<u8>> {
    write_xml(doc, Vec::new())
}

/// Serialize `doc` and write it to `path`, replacing any existing file.
///
/// The document is rendered in memory first, so the file is only opened once
/// there is something to write. The write itself is not atomic: an I/O error
/// part-way through can leave a truncated file behind.
pub fn write_document(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let serialization_error = |e: io::Error| FeedError::Serialization {
        path: path.to_path_buf(),
        details: e.to_string(),
    };

    let bytes = to_xml(doc).map_err(serialization_error)?;
    debug!(bytes = bytes.len(), "rendered feed XML");

    let mut file = File::create(path).map_err(serialization_error)?;
    file.write_all(&bytes).map_err(serialization_error)?;
    file.flush().map_err(serialization_error)?;

    info!(?path, bytes = bytes.len(), "wrote feed");
    Ok(())
}
