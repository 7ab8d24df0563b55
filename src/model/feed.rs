//! `atom:feed`: the top-level document.

use super::child::AtomElement;
use super::common::{CommonAttributes, Completeness, impl_has_common, require};
use super::{Category, Entry, Extension, Generator, Link, Person, PersonKind, Text, TextKind};
use crate::common::{Error, Result};

/// A feed document and the entries it owns.
///
/// Instances are immutable; use [`Feed::builder`] to assemble one, or
/// [`Feed::into_builder`] to derive a modified copy.
///
/// # Examples
///
/// ```
/// use atomfeed::{Entry, Feed, Person};
///
/// let feed = Feed::builder()
///     .id("urn:example:feed")
///     .title("Example")
///     .updated("2024-01-01T00:00:00Z")
///     .author(Person::author("Jane").build())
///     .entry(
///         Entry::builder()
///             .id("urn:example:1")
///             .title("First")
///             .updated("2024-01-01T00:00:00Z")
///             .build(),
///     )
///     .build();
///
/// assert_eq!(feed.entries().len(), 1);
/// assert!(feed.all_entries_have_authors());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<Text>,
    pub(crate) subtitle: Option<Text>,
    pub(crate) updated: Option<String>,
    pub(crate) rights: Option<Text>,
    pub(crate) generator: Option<Generator>,
    pub(crate) icon: Option<String>,
    pub(crate) logo: Option<String>,
    pub(crate) authors: Vec<Person>,
    pub(crate) contributors: Vec<Person>,
    pub(crate) links: Vec<Link>,
    pub(crate) categories: Vec<Category>,
    pub(crate) extensions: Vec<Extension>,
    pub(crate) entries: Vec<Entry>,
    pub(crate) common: CommonAttributes,
}

impl Feed {
    pub fn builder() -> FeedBuilder {
        FeedBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&Text> {
        self.title.as_ref()
    }

    pub fn subtitle(&self) -> Option<&Text> {
        self.subtitle.as_ref()
    }

    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
    }

    pub fn rights(&self) -> Option<&Text> {
        self.rights.as_ref()
    }

    pub fn generator(&self) -> Option<&Generator> {
        self.generator.as_ref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn authors(&self) -> &[Person] {
        &self.authors
    }

    pub fn contributors(&self) -> &[Person] {
        &self.contributors
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Whether every entry resolves to an author.
    ///
    /// Feed-level authors are inherited by all entries; otherwise each entry
    /// must name one itself or through its source. A feed without authors or
    /// entries passes.
    pub fn all_entries_have_authors(&self) -> bool {
        !self.authors.is_empty() || self.entries.iter().all(Entry::has_author)
    }

    pub fn into_builder(self) -> FeedBuilder {
        FeedBuilder { feed: self }
    }
}

impl Completeness for Feed {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "id", self.id());
        if self.title.is_none() {
            missing.push("title");
        }
        require(&mut missing, "updated", self.updated());
        missing
    }
}

/// Builder for [`Feed`]
#[derive(Debug, Clone, Default)]
pub struct FeedBuilder {
    pub(crate) feed: Feed,
}

impl FeedBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.feed.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<Text>) -> Self {
        self.feed.title = Some(title.into().with_kind(TextKind::Title));
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<Text>) -> Self {
        self.feed.subtitle = Some(subtitle.into().with_kind(TextKind::Subtitle));
        self
    }

    pub fn updated(mut self, updated: impl Into<String>) -> Self {
        self.feed.updated = Some(updated.into());
        self
    }

    pub fn rights(mut self, rights: impl Into<Text>) -> Self {
        self.feed.rights = Some(rights.into().with_kind(TextKind::Rights));
        self
    }

    pub fn generator(mut self, generator: Generator) -> Self {
        self.feed.generator = Some(generator);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.feed.icon = Some(icon.into());
        self
    }

    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.feed.logo = Some(logo.into());
        self
    }

    pub fn author(mut self, author: Person) -> Self {
        self.feed.authors.push(author.with_kind(PersonKind::Author));
        self
    }

    pub fn contributor(mut self, contributor: Person) -> Self {
        self.feed
            .contributors
            .push(contributor.with_kind(PersonKind::Contributor));
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.feed.links.push(link);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.feed.categories.push(category);
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.feed.extensions.push(extension);
        self
    }

    pub fn entry(mut self, entry: Entry) -> Self {
        self.feed.entries.push(entry);
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.feed.common.base = Some(base.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.feed.common.lang = Some(lang.into());
        self
    }

    /// Add a child to the collection matching its type.
    ///
    /// Accepts authors, contributors, links, categories, extensions and
    /// entries; anything else is a [`Error::TypeMismatch`].
    pub fn append(&mut self, child: impl Into<AtomElement>) -> Result<&mut Self> {
        match child.into() {
            AtomElement::Person(person) => match person.kind() {
                PersonKind::Author => self.feed.authors.push(person),
                PersonKind::Contributor => self.feed.contributors.push(person),
            },
            AtomElement::Link(link) => self.feed.links.push(link),
            AtomElement::Category(category) => self.feed.categories.push(category),
            AtomElement::Extension(extension) => self.feed.extensions.push(extension),
            AtomElement::Entry(entry) => self.feed.entries.push(entry),
            other => {
                return Err(Error::TypeMismatch {
                    container: "feed",
                    child: other.describe(),
                });
            },
        }
        Ok(self)
    }

    pub fn build(self) -> Feed {
        self.feed
    }
}

impl_has_common!(Feed => common; FeedBuilder => feed.common);

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> Entry {
        Entry::builder()
            .id(id)
            .title("t")
            .updated("2024-01-01T00:00:00Z")
            .build()
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let mut builder = Feed::builder();
        let link = Link::builder("https://example.org/a").build();
        builder
            .append(link.clone())
            .unwrap()
            .append(entry("urn:1"))
            .unwrap()
            .append(link.clone())
            .unwrap()
            .append(entry("urn:2"))
            .unwrap();
        let feed = builder.build();
        assert_eq!(feed.links(), &[link.clone(), link]);
        let ids: Vec<_> = feed.entries().iter().map(|e| e.id().unwrap()).collect();
        assert_eq!(ids, vec!["urn:1", "urn:2"]);
    }

    #[test]
    fn test_append_rejects_text() {
        let mut builder = Feed::builder();
        let result = builder.append(Text::plain(TextKind::Title, "x"));
        assert!(matches!(
            result,
            Err(Error::TypeMismatch {
                container: "feed",
                ..
            })
        ));
    }

    #[test]
    fn test_author_inheritance() {
        let orphan = Feed::builder().entry(entry("urn:1")).build();
        assert!(!orphan.all_entries_have_authors());

        let inherited = orphan
            .into_builder()
            .author(Person::author("A").build())
            .build();
        assert!(inherited.all_entries_have_authors());

        assert!(Feed::default().all_entries_have_authors());
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            Feed::default().missing_fields(),
            vec!["id", "title", "updated"]
        );
        let feed = Feed::builder()
            .id("urn:f")
            .title("T")
            .updated("2024-01-01T00:00:00Z")
            .build();
        assert!(feed.is_complete());
    }
}
