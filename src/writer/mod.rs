//! Atom XML writer.
//!
//! Documents are validated before anything is emitted; a document with any
//! violation is refused with [`Error::Structural`] and no output. Elements
//! are written in a fixed order (identity, required text, optional simple
//! fields, repeated constructs, extensions, then entries) and optional
//! attributes without a value are omitted. Output is compact, with no
//! indentation.
//!
//! # Examples
//!
//! ```
//! use atomfeed::{Feed, Person, writer};
//!
//! let feed = Feed::builder()
//!     .id("urn:x")
//!     .title("T")
//!     .updated("2024-01-01T00:00:00Z")
//!     .author(Person::author("A").build())
//!     .build();
//!
//! let xml = writer::write_feed(&feed)?;
//! assert!(xml.ends_with("<author><name>A</name></author></feed>"));
//! # Ok::<(), atomfeed::Error>(())
//! ```

mod constructs;

use crate::common::xml::{ATOM_NS, XmlWriter};
use crate::common::{Error, Result};
use crate::model::{AtomDocument, Entry, Feed, Source};
use crate::validate;
use constructs::{categories, common, extensions, generator, links, people, simple, text};
use serde::Deserialize;
use tracing::debug;

/// Writer configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Emit the `<?xml version="1.0" encoding="utf-8"?>` declaration
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { declaration: true }
    }
}

/// Serialize a document with default options
pub fn write(document: &AtomDocument) -> Result<String> {
    write_with(document, &WriteOptions::default())
}

pub fn write_feed(feed: &Feed) -> Result<String> {
    write_with(&AtomDocument::Feed(feed.clone()), &WriteOptions::default())
}

pub fn write_entry(entry: &Entry) -> Result<String> {
    write_with(&AtomDocument::Entry(entry.clone()), &WriteOptions::default())
}

pub fn write_with(document: &AtomDocument, options: &WriteOptions) -> Result<String> {
    let violations = validate::document(document);
    if !violations.is_empty() {
        debug!(
            root = document.root_name(),
            violations = violations.len(),
            "refusing to write invalid atom document"
        );
        return Err(Error::Structural(violations.into()));
    }

    let mut w = XmlWriter::new();
    if options.declaration {
        w.declaration();
    }
    match document {
        AtomDocument::Feed(feed) => write_feed_element(&mut w, feed),
        AtomDocument::Entry(entry) => write_entry_element(&mut w, entry, true),
    }
    let xml = w.finish();

    debug!(root = document.root_name(), bytes = xml.len(), "wrote atom document");
    Ok(xml)
}

fn write_feed_element(w: &mut XmlWriter, feed: &Feed) {
    w.start("feed").attr("xmlns", ATOM_NS);
    common(w, &feed.common);
    simple(w, "id", feed.id());
    text(w, feed.title());
    simple(w, "updated", feed.updated());
    text(w, feed.subtitle());
    text(w, feed.rights());
    generator(w, feed.generator());
    simple(w, "icon", feed.icon());
    simple(w, "logo", feed.logo());
    people(w, feed.authors());
    people(w, feed.contributors());
    links(w, feed.links());
    categories(w, feed.categories());
    extensions(w, feed.extensions());
    for entry in feed.entries() {
        write_entry_element(w, entry, false);
    }
    w.end("feed");
}

fn write_entry_element(w: &mut XmlWriter, entry: &Entry, root: bool) {
    w.start("entry");
    if root {
        w.attr("xmlns", ATOM_NS);
    }
    common(w, &entry.common);
    simple(w, "id", entry.id());
    text(w, entry.title());
    simple(w, "updated", entry.updated());
    simple(w, "published", entry.published());
    text(w, entry.rights());
    text(w, entry.summary());
    text(w, entry.content());
    if let Some(source) = entry.source() {
        write_source_element(w, source);
    }
    people(w, entry.authors());
    people(w, entry.contributors());
    links(w, entry.links());
    categories(w, entry.categories());
    extensions(w, entry.extensions());
    w.end("entry");
}

fn write_source_element(w: &mut XmlWriter, source: &Source) {
    w.start("source");
    common(w, &source.common);
    simple(w, "id", source.id());
    text(w, source.title());
    simple(w, "updated", source.updated());
    text(w, source.subtitle());
    text(w, source.rights());
    generator(w, source.generator());
    simple(w, "icon", source.icon());
    simple(w, "logo", source.logo());
    people(w, source.authors());
    people(w, source.contributors());
    links(w, source.links());
    categories(w, source.categories());
    extensions(w, source.extensions());
    w.end("source");
}
