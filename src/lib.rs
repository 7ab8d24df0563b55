//! Atomfeed - an object-model codec for the Atom syndication format
//!
//! This library parses Atom XML (RFC 4287) into a typed document graph,
//! checks the format's structural rules, and writes the graph back out as
//! XML. The same graph maps to and from a generic JSON representation.
//!
//! # Features
//!
//! - **Lenient parser**: always returns a best-effort document and reports
//!   every structural error or warning through a diagnostic sink
//! - **Validating writer**: refuses to emit a document that misses a
//!   required field or an entry author
//! - **Extension fidelity**: elements outside the Atom namespace are kept as
//!   raw, self-contained XML and written back unchanged
//! - **Builders**: assemble documents without parsing anything
//! - **JSON codec** (`json` feature, on by default): registered field tables
//!   per type, omitting absent and empty fields
//!
//! # Example - Reading a feed
//!
//! ```
//! use atomfeed::parse;
//!
//! let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
//!   <id>urn:example:feed</id>
//!   <title>Example</title>
//!   <updated>2024-01-01T00:00:00Z</updated>
//!   <author><name>Jane</name></author>
//!   <entry>
//!     <id>urn:example:1</id>
//!     <title>First</title>
//!     <updated>2024-01-01T00:00:00Z</updated>
//!   </entry>
//! </feed>"#;
//!
//! let parsed = parse(xml)?;
//! for diagnostic in &parsed.diagnostics {
//!     println!("{diagnostic}");
//! }
//!
//! let feed = parsed.document.as_feed().unwrap();
//! for entry in feed.entries() {
//!     println!("{}", entry.title().and_then(|t| t.text()).unwrap_or_default());
//! }
//! # Ok::<(), atomfeed::Error>(())
//! ```
//!
//! # Example - Writing an entry
//!
//! ```
//! use atomfeed::{Entry, Link, Person, write_entry};
//!
//! let entry = Entry::builder()
//!     .id("urn:example:1")
//!     .title("Hello")
//!     .updated("2024-01-01T00:00:00Z")
//!     .author(Person::author("Jane").build())
//!     .link(Link::builder("https://example.org/hello").rel("alternate").build())
//!     .build();
//!
//! let xml = write_entry(&entry)?;
//! assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
//! # Ok::<(), atomfeed::Error>(())
//! ```

/// Shared infrastructure: errors and the XML element tree
pub mod common;

/// Typed document model and builders
pub mod model;

/// XML reader producing the document model
pub mod parser;

/// Structural rules shared by the parser and the writer
pub mod validate;

/// XML writer for the document model
pub mod writer;

#[cfg(feature = "json")]
pub mod reflect;

/// JSON encoding and decoding of the document model
#[cfg(feature = "json")]
pub mod json;

pub use common::{Error, Result};
pub use model::{
    AtomDocument, AtomElement, Category, CategoryBuilder, CommonAttributes, Completeness, Entry,
    EntryBuilder, Extension, ExtensionBuilder, Feed, FeedBuilder, Generator, GeneratorBuilder,
    HasCommon, Link, LinkBuilder, Person, PersonBuilder, PersonKind, Source, SourceBuilder, Text,
    TextBuilder, TextKind, TextType,
};
pub use parser::{Diagnostic, DiagnosticSink, ParseOptions, Parsed, Severity, parse, parse_bytes, parse_with};
pub use validate::{Violation, ViolationKind, Violations};
pub use writer::{WriteOptions, write, write_entry, write_feed, write_with};
