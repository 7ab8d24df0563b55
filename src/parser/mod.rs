//! Atom XML reader.
//!
//! The document is loaded into an [`Element`] tree and walked by recursive
//! descent, one sub-parser per Atom construct. Elements outside the Atom
//! namespace are captured as [`crate::model::Extension`]s wherever they
//! appear; unknown Atom elements and attributes produce warnings and are
//! skipped.
//!
//! Parsing is lenient: a document that is well-formed XML with an Atom root
//! always yields a best-effort [`AtomDocument`], and every structural problem
//! is reported through a [`DiagnosticSink`]. Only malformed XML and a
//! non-Atom root are fatal, unless [`ParseOptions::strict`] is set.
//!
//! # Examples
//!
//! ```
//! use atomfeed::parser;
//!
//! let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
//!   <id>urn:x</id><title>T</title><updated>2024-01-01T00:00:00Z</updated>
//!   <author><name>A</name></author>
//! </feed>"#;
//!
//! let parsed = parser::parse(xml)?;
//! assert!(parsed.diagnostics.is_empty());
//!
//! let feed = parsed.document.as_feed().unwrap();
//! assert_eq!(feed.title().unwrap().text(), Some("T"));
//! assert_eq!(feed.authors().len(), 1);
//! # Ok::<(), atomfeed::Error>(())
//! ```

mod constructs;
mod diagnostic;
mod document;
mod options;
mod text;

pub use diagnostic::{Diagnostic, DiagnosticSink, Severity};
pub use options::ParseOptions;

use crate::common::xml::{ATOM_NS, Element, XML_NS};
use crate::common::{Error, Result};
use crate::model::{AtomDocument, CommonAttributes};
use crate::validate;
use tracing::{debug, trace};

/// A parsed document with everything reported while reading it
#[derive(Debug, Clone)]
pub struct Parsed {
    pub document: AtomDocument,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

/// Parse a feed or entry document, collecting diagnostics
pub fn parse(xml: &str) -> Result<Parsed> {
    let mut diagnostics = Vec::new();
    let document = parse_with(xml, &ParseOptions::default(), &mut diagnostics)?;
    Ok(Parsed {
        document,
        diagnostics,
    })
}

/// Parse UTF-8 bytes, e.g. a fetched response body. A leading BOM is ignored.
pub fn parse_bytes(bytes: &[u8]) -> Result<Parsed> {
    let mut diagnostics = Vec::new();
    let root = Element::from_bytes(bytes)?;
    let document = read_document(&root, &ParseOptions::default(), &mut diagnostics)?;
    Ok(Parsed {
        document,
        diagnostics,
    })
}

/// Parse with explicit options, reporting diagnostics to `sink` as they are
/// found
pub fn parse_with<S: DiagnosticSink>(
    xml: &str,
    options: &ParseOptions,
    sink: &mut S,
) -> Result<AtomDocument> {
    let root = Element::from_str(xml)?;
    read_document(&root, options, sink)
}

fn read_document(
    root: &Element,
    options: &ParseOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<AtomDocument> {
    if root.namespace_uri() != Some(ATOM_NS) {
        return Err(Error::NotAtomDocument(format!(
            "root element <{}> is not in the Atom namespace",
            root.tag_name()
        )));
    }

    let mut ctx = Context::new(sink, options);
    let document = match root.local_name() {
        "feed" => AtomDocument::Feed(document::feed(&mut ctx, root, "/feed")),
        "entry" => AtomDocument::Entry(document::entry(&mut ctx, root, "/entry")),
        other => {
            return Err(Error::NotAtomDocument(format!(
                "expected <feed> or <entry>, found <{other}>"
            )));
        },
    };

    let violations = validate::document(&document);
    for violation in &violations {
        ctx.report(Diagnostic::error(
            violation.path.clone(),
            element_of(&violation.path),
            violation.kind.to_string(),
        ));
    }

    debug!(
        root = document.root_name(),
        entries = document.as_feed().map_or(0, |feed| feed.entries().len()),
        warnings = ctx.warnings,
        errors = violations.len(),
        "parsed atom document"
    );

    if options.strict && !violations.is_empty() {
        return Err(Error::Structural(violations.into()));
    }
    Ok(document)
}

/// Local name of the last step of a path, without its index
fn element_of(path: &str) -> &str {
    let step = path.rsplit('/').next().unwrap_or(path);
    step.split('[').next().unwrap_or(step)
}

/// State threaded through the recursive descent
pub(crate) struct Context<'a> {
    sink: &'a mut dyn DiagnosticSink,
    options: &'a ParseOptions,
    warnings: usize,
}

impl<'a> Context<'a> {
    fn new(sink: &'a mut dyn DiagnosticSink, options: &'a ParseOptions) -> Self {
        Self {
            sink,
            options,
            warnings: 0,
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }

    fn warn(&mut self, path: &str, element: &Element, message: impl Into<String>) {
        self.warnings += 1;
        let diagnostic = Diagnostic::warning(path, element.tag_name(), message);
        debug!(%diagnostic, "atom warning");
        self.report(diagnostic);
    }

    /// Report an Atom-namespace element this codec does not know
    fn unknown_element(&mut self, parent: &str, element: &Element) {
        let path = child_path(parent, element);
        self.warn(
            &path,
            element,
            format!("unknown element <{}> skipped", element.tag_name()),
        );
    }

    /// Read `xml:base`/`xml:lang` and warn about unprefixed attributes not
    /// in `known`. Attributes in other namespaces are allowed.
    fn attributes(&mut self, path: &str, element: &Element, known: &[&str]) -> CommonAttributes {
        for (key, _) in element.attributes() {
            if !key.contains(':') && !known.contains(&key.as_str()) {
                self.warn(path, element, format!("unknown attribute '{key}'"));
            }
        }
        CommonAttributes {
            base: element.attribute_ns(XML_NS, "base").map(str::to_string),
            lang: element.attribute_ns(XML_NS, "lang").map(str::to_string),
        }
    }

    /// Store a single-valued child, warning when it repeats
    fn single<T>(&mut self, parent: &str, element: &Element, slot: &mut Option<T>, value: T) {
        if slot.is_some() {
            let path = child_path(parent, element);
            self.warn(&path, element, "duplicate element, the last one wins");
        }
        *slot = Some(value);
    }

    /// Read a date construct, warning when it is not an RFC 3339 timestamp
    fn date(&mut self, parent: &str, element: &Element) -> String {
        let value = simple(element);
        if self.options.check_dates && chrono::DateTime::parse_from_rfc3339(&value).is_err() {
            let path = child_path(parent, element);
            self.warn(&path, element, format!("'{value}' is not an RFC 3339 date"));
        }
        value
    }
}

/// Trimmed character content of a simple element (`id`, `uri`, `name`, ...)
fn simple(element: &Element) -> String {
    element.text().trim().to_string()
}

fn is_atom(element: &Element) -> bool {
    element.namespace_uri() == Some(ATOM_NS)
}

fn child_path(parent: &str, element: &Element) -> String {
    format!("{parent}/{}", element.local_name())
}

fn indexed_path(parent: &str, element: &Element, index: usize) -> String {
    let path = format!("{parent}/{}[{index}]", element.local_name());
    trace!(%path, "descending");
    path
}
