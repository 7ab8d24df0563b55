//! Structural rules shared by the parser and the writer.
//!
//! Validation walks a document graph and lists every violated constraint:
//! missing required fields, entries without a resolvable author, malformed
//! text constructs and extension markup that would not survive being written
//! out verbatim. It never mutates the graph. The parser
//! reports violations as Error diagnostics and carries on; the writer refuses
//! to produce output while any remain.
//!
//! Paths name the offending construct XPath-style with 1-based indices, e.g.
//! `/feed/entry[2]/author[1]`.

use crate::common::xml::Element;
use crate::model::{
    AtomDocument, Category, Completeness, Entry, Extension, Feed, Link, Person, Source, Text,
    TextKind, TextType,
};
use std::fmt;

/// What is wrong with a construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A mandatory child element or attribute is absent or blank
    MissingField(&'static str),
    /// An entry has no author of its own, in its source, or inherited from
    /// the enclosing feed
    MissingAuthor,
    /// An `xhtml` text construct whose value is not a single well-formed,
    /// self-contained element
    XhtmlNotMarkup,
    /// An `xhtml` text construct that also declares `src`
    XhtmlWithSrc,
    /// `src` on a text construct other than `content`
    SrcNotAllowed,
    /// Raw markup (extension or XML media content) that is not well-formed
    /// and self-contained
    InvalidMarkup(String),
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingField(field) => write!(f, "missing required field '{field}'"),
            ViolationKind::MissingAuthor => f.write_str("no author, and none can be inherited"),
            ViolationKind::XhtmlNotMarkup => f.write_str("xhtml value must be a single element"),
            ViolationKind::XhtmlWithSrc => f.write_str("xhtml text cannot have a src attribute"),
            ViolationKind::SrcNotAllowed => f.write_str("only content may have a src attribute"),
            ViolationKind::InvalidMarkup(reason) => write!(f, "invalid markup: {reason}"),
        }
    }
}

/// One violated constraint at one location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl Violation {
    fn new(path: &str, kind: ViolationKind) -> Self {
        Self {
            path: path.to_string(),
            kind,
        }
    }

    /// The missing field, for [`ViolationKind::MissingField`]
    pub fn field(&self) -> Option<&'static str> {
        match self.kind {
            ViolationKind::MissingField(field) => Some(field),
            _ => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Every violation found in one document, in traversal order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields reported missing, in order of discovery
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.0.iter().filter_map(Violation::field).collect()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Violations(violations)
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Validate a feed or standalone entry document
pub fn document(document: &AtomDocument) -> Vec<Violation> {
    match document {
        AtomDocument::Feed(feed) => self::feed(feed),
        AtomDocument::Entry(entry) => self::entry(entry, false),
    }
}

/// Validate a feed and every entry it owns.
///
/// Entries inherit the feed's authors.
pub fn feed(feed: &Feed) -> Vec<Violation> {
    let mut validator = Validator::default();
    validator.feed("/feed", feed);
    validator.violations
}

/// Validate an entry. `inherits_author` is true when the enclosing feed has
/// at least one author.
pub fn entry(entry: &Entry, inherits_author: bool) -> Vec<Violation> {
    let mut validator = Validator::default();
    validator.entry("/entry", entry, inherits_author);
    validator.violations
}

/// Validate a source snapshot; only nested constructs have requirements
pub fn source(source: &Source) -> Vec<Violation> {
    let mut validator = Validator::default();
    validator.source("/source", source);
    validator.violations
}

pub fn person(person: &Person) -> Vec<Violation> {
    let mut validator = Validator::default();
    validator.person(&format!("/{}", person.kind().element_name()), person);
    validator.violations
}

pub fn link(link: &Link) -> Vec<Violation> {
    let mut validator = Validator::default();
    validator.required("/link", link);
    validator.violations
}

pub fn category(category: &Category) -> Vec<Violation> {
    let mut validator = Validator::default();
    validator.required("/category", category);
    validator.violations
}

pub fn text(text: &Text) -> Vec<Violation> {
    let mut validator = Validator::default();
    validator.text("", text);
    validator.violations
}

#[derive(Default)]
struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    fn required(&mut self, path: &str, construct: &impl Completeness) {
        for field in construct.missing_fields() {
            self.violations
                .push(Violation::new(path, ViolationKind::MissingField(field)));
        }
    }

    fn feed(&mut self, path: &str, feed: &Feed) {
        self.required(path, feed);
        self.optional_text(path, feed.title());
        self.optional_text(path, feed.subtitle());
        self.optional_text(path, feed.rights());
        self.people(path, feed.authors());
        self.people(path, feed.contributors());
        self.links(path, feed.links());
        self.categories(path, feed.categories());
        self.extensions(path, feed.extensions());

        let inherits_author = !feed.authors().is_empty();
        for (i, entry) in feed.entries().iter().enumerate() {
            self.entry(&format!("{path}/entry[{}]", i + 1), entry, inherits_author);
        }
    }

    fn entry(&mut self, path: &str, entry: &Entry, inherits_author: bool) {
        self.required(path, entry);
        if !inherits_author && !entry.has_author() {
            self.violations
                .push(Violation::new(path, ViolationKind::MissingAuthor));
        }
        self.optional_text(path, entry.title());
        self.optional_text(path, entry.rights());
        self.optional_text(path, entry.summary());
        self.optional_text(path, entry.content());
        if let Some(source) = entry.source() {
            self.source(&format!("{path}/source"), source);
        }
        self.people(path, entry.authors());
        self.people(path, entry.contributors());
        self.links(path, entry.links());
        self.categories(path, entry.categories());
        self.extensions(path, entry.extensions());
    }

    fn source(&mut self, path: &str, source: &Source) {
        self.required(path, source);
        self.optional_text(path, source.title());
        self.optional_text(path, source.subtitle());
        self.optional_text(path, source.rights());
        self.people(path, source.authors());
        self.people(path, source.contributors());
        self.links(path, source.links());
        self.categories(path, source.categories());
        self.extensions(path, source.extensions());
    }

    fn person(&mut self, path: &str, person: &Person) {
        self.required(path, person);
        self.extensions(path, person.extensions());
    }

    fn people(&mut self, path: &str, people: &[Person]) {
        for (i, person) in people.iter().enumerate() {
            let name = person.kind().element_name();
            self.person(&format!("{path}/{name}[{}]", i + 1), person);
        }
    }

    fn links(&mut self, path: &str, links: &[Link]) {
        for (i, link) in links.iter().enumerate() {
            self.required(&format!("{path}/link[{}]", i + 1), link);
        }
    }

    fn categories(&mut self, path: &str, categories: &[Category]) {
        for (i, category) in categories.iter().enumerate() {
            self.required(&format!("{path}/category[{}]", i + 1), category);
        }
    }

    /// Extensions are written verbatim, so each must be one element
    fn extensions(&mut self, path: &str, extensions: &[Extension]) {
        for extension in extensions {
            let path = format!("{path}/{}", extension.name());
            match Element::parse_fragment(extension.xml()) {
                Ok(fragment) if fragment.has_single_element() => {},
                Ok(_) => self.violations.push(Violation::new(
                    &path,
                    ViolationKind::InvalidMarkup("expected a single element".to_string()),
                )),
                Err(err) => self
                    .violations
                    .push(Violation::new(&path, ViolationKind::InvalidMarkup(err.to_string()))),
            }
        }
    }

    fn optional_text(&mut self, parent: &str, text: Option<&Text>) {
        if let Some(text) = text {
            self.text(parent, text);
        }
    }

    fn text(&mut self, parent: &str, text: &Text) {
        let path = format!("{parent}/{}", text.kind().element_name());
        self.required(&path, text);
        if text.src().is_some() && text.kind() != TextKind::Content {
            self.violations
                .push(Violation::new(&path, ViolationKind::SrcNotAllowed));
        }

        let content_type = text.content_type();
        if *content_type == TextType::Xhtml {
            if text.src().is_some() {
                self.violations
                    .push(Violation::new(&path, ViolationKind::XhtmlWithSrc));
            }
            if let Some(markup) = text.text()
                && !Element::parse_fragment(markup).is_ok_and(|f| f.has_single_element())
            {
                self.violations
                    .push(Violation::new(&path, ViolationKind::XhtmlNotMarkup));
            }
        } else if content_type.is_xml_media()
            && let Some(markup) = text.text()
            && let Err(err) = Element::parse_fragment(markup)
        {
            self.violations
                .push(Violation::new(&path, ViolationKind::InvalidMarkup(err.to_string())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextKind;

    fn entry(id: &str) -> Entry {
        Entry::builder()
            .id(id)
            .title("Entry")
            .updated("2024-01-01T00:00:00Z")
            .build()
    }

    fn feed() -> crate::model::FeedBuilder {
        Feed::builder()
            .id("urn:feed")
            .title("Feed")
            .updated("2024-01-01T00:00:00Z")
    }

    #[test]
    fn test_missing_feed_fields_are_named() {
        let violations = Violations(self::feed_of(Feed::default()));
        assert_eq!(violations.missing_fields(), vec!["id", "title", "updated"]);
        assert_eq!(
            violations.to_string(),
            "/feed: missing required field 'id'; /feed: missing required field 'title'; \
             /feed: missing required field 'updated'"
        );
    }

    fn feed_of(feed: Feed) -> Vec<Violation> {
        super::feed(&feed)
    }

    #[test]
    fn test_entry_inherits_feed_author() {
        let with_author = feed()
            .author(Person::author("A").build())
            .entry(entry("urn:e1"))
            .build();
        assert!(feed_of(with_author).is_empty());

        let without_author = feed().entry(entry("urn:e1")).build();
        let violations = feed_of(without_author);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "/feed/entry[1]");
        assert_eq!(violations[0].kind, ViolationKind::MissingAuthor);
    }

    #[test]
    fn test_entry_author_from_source() {
        let sourced = entry("urn:e1")
            .into_builder()
            .source(Source::builder().author(Person::author("S").build()).build())
            .build();
        assert!(super::entry(&sourced, false).is_empty());
        assert_eq!(
            super::entry(&entry("urn:e2"), false)[0].kind,
            ViolationKind::MissingAuthor
        );
    }

    #[test]
    fn test_feed_without_entries_needs_no_author() {
        assert!(feed_of(feed().build()).is_empty());
    }

    #[test]
    fn test_nested_required_fields() {
        let broken = feed()
            .author(Person::author("").build())
            .link(Link::default())
            .category(Category::builder("").build())
            .build();
        let paths: Vec<_> = feed_of(broken)
            .into_iter()
            .map(|v| format!("{} {}", v.path, v.field().unwrap_or("-")))
            .collect();
        assert_eq!(
            paths,
            vec![
                "/feed/author[1] name",
                "/feed/link[1] href",
                "/feed/category[1] term"
            ]
        );
    }

    #[test]
    fn test_xhtml_must_be_one_self_contained_element() {
        for markup in [
            "<a><b>",
            "<div>no namespace declared</div>",
            r#"<div xmlns="http://www.w3.org/1999/xhtml"/><div xmlns="http://www.w3.org/1999/xhtml"/>"#,
        ] {
            let text = Text::xhtml(TextKind::Subtitle, markup);
            assert_eq!(
                super::text(&text)[0].kind,
                ViolationKind::XhtmlNotMarkup,
                "{markup}"
            );
        }
        let div = Text::xhtml(
            TextKind::Subtitle,
            r#"<div xmlns="http://www.w3.org/1999/xhtml"><p>ok</p></div>"#,
        );
        assert!(super::text(&div).is_empty());
    }

    #[test]
    fn test_src_is_content_only() {
        let title = Text::builder(TextKind::Title)
            .content_type(TextType::Media("image/png".into()))
            .src("https://example.org/t.png")
            .build();
        let violations = super::text(&title);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "/title");
        assert_eq!(violations[0].kind, ViolationKind::SrcNotAllowed);

        let content = title.with_kind(TextKind::Content);
        assert!(super::text(&content).is_empty());
    }

    #[test]
    fn test_xml_media_content_must_be_well_formed() {
        let broken = Text::builder(TextKind::Content)
            .content_type(TextType::Media("application/xml".into()))
            .text("<a>")
            .build();
        assert!(matches!(
            super::text(&broken)[0].kind,
            ViolationKind::InvalidMarkup(_)
        ));
    }

    #[test]
    fn test_extension_markup_is_checked() {
        let bad = Extension::builder("urn:ext", "flag").xml("<flag>").build();
        let violations = feed_of(feed().extension(bad).build());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "/feed/flag");
        assert!(matches!(violations[0].kind, ViolationKind::InvalidMarkup(_)));

        let nested = Person::author("A")
            .extension(Extension::builder("urn:ext", "nick").xml("<nick>jj</nick>").build())
            .build();
        let violations = feed_of(feed().author(nested).build());
        assert_eq!(violations[0].path, "/feed/author[1]/nick");

        let built = Extension::builder("urn:ext", "flag").attribute("on", "yes").build();
        assert!(feed_of(feed().extension(built).build()).is_empty());
    }

    #[test]
    fn test_xhtml_rules() {
        let bare = Text::xhtml(TextKind::Content, "just words");
        assert_eq!(super::text(&bare)[0].kind, ViolationKind::XhtmlNotMarkup);

        let with_src = Text::builder(TextKind::Content)
            .content_type(TextType::Xhtml)
            .text("<div xmlns=\"http://www.w3.org/1999/xhtml\"/>")
            .src("https://example.org/")
            .build();
        assert_eq!(super::text(&with_src)[0].kind, ViolationKind::XhtmlWithSrc);

        let empty = Text::builder(TextKind::Summary)
            .content_type(TextType::Xhtml)
            .build();
        let violations = super::text(&empty);
        assert_eq!(violations[0].path, "/summary");
        assert_eq!(violations[0].field(), Some("div"));
    }
}
