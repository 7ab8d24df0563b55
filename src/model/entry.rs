//! `atom:entry`: one syndicated item.

use super::child::AtomElement;
use super::common::{CommonAttributes, Completeness, impl_has_common, require};
use super::{Category, Extension, Link, Person, PersonKind, Source, Text, TextKind};
use crate::common::{Error, Result};

/// A syndicated item, inside a feed or standalone.
///
/// `id`, `title` and `updated` are mandatory but optional here: a parsed entry
/// keeps whatever the document contained, and validation reports the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<Text>,
    pub(crate) updated: Option<String>,
    pub(crate) published: Option<String>,
    pub(crate) rights: Option<Text>,
    pub(crate) summary: Option<Text>,
    pub(crate) content: Option<Text>,
    pub(crate) source: Option<Source>,
    pub(crate) authors: Vec<Person>,
    pub(crate) contributors: Vec<Person>,
    pub(crate) links: Vec<Link>,
    pub(crate) categories: Vec<Category>,
    pub(crate) extensions: Vec<Extension>,
    pub(crate) common: CommonAttributes,
}

impl Entry {
    pub fn builder() -> EntryBuilder {
        EntryBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&Text> {
        self.title.as_ref()
    }

    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
    }

    pub fn published(&self) -> Option<&str> {
        self.published.as_deref()
    }

    pub fn rights(&self) -> Option<&Text> {
        self.rights.as_ref()
    }

    pub fn summary(&self) -> Option<&Text> {
        self.summary.as_ref()
    }

    pub fn content(&self) -> Option<&Text> {
        self.content.as_ref()
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
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

    /// Whether the entry names an author itself or through its source
    pub fn has_author(&self) -> bool {
        !self.authors.is_empty()
            || self
                .source
                .as_ref()
                .is_some_and(|source| !source.authors.is_empty())
    }

    pub fn into_builder(self) -> EntryBuilder {
        EntryBuilder { entry: self }
    }
}

impl Completeness for Entry {
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

/// Builder for [`Entry`]
#[derive(Debug, Clone, Default)]
pub struct EntryBuilder {
    pub(crate) entry: Entry,
}

impl EntryBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entry.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<Text>) -> Self {
        self.entry.title = Some(title.into().with_kind(TextKind::Title));
        self
    }

    pub fn updated(mut self, updated: impl Into<String>) -> Self {
        self.entry.updated = Some(updated.into());
        self
    }

    pub fn published(mut self, published: impl Into<String>) -> Self {
        self.entry.published = Some(published.into());
        self
    }

    pub fn rights(mut self, rights: impl Into<Text>) -> Self {
        self.entry.rights = Some(rights.into().with_kind(TextKind::Rights));
        self
    }

    pub fn summary(mut self, summary: impl Into<Text>) -> Self {
        self.entry.summary = Some(summary.into().with_kind(TextKind::Summary));
        self
    }

    pub fn content(mut self, content: impl Into<Text>) -> Self {
        self.entry.content = Some(content.into().with_kind(TextKind::Content));
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.entry.source = Some(source);
        self
    }

    pub fn author(mut self, author: Person) -> Self {
        self.entry.authors.push(author.with_kind(PersonKind::Author));
        self
    }

    pub fn contributor(mut self, contributor: Person) -> Self {
        self.entry
            .contributors
            .push(contributor.with_kind(PersonKind::Contributor));
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.entry.links.push(link);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.entry.categories.push(category);
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.entry.extensions.push(extension);
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.entry.common.base = Some(base.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.entry.common.lang = Some(lang.into());
        self
    }

    /// Add a child to the collection matching its type.
    ///
    /// Accepts authors, contributors, links, categories and extensions.
    pub fn append(&mut self, child: impl Into<AtomElement>) -> Result<&mut Self> {
        match child.into() {
            AtomElement::Person(person) => match person.kind() {
                PersonKind::Author => self.entry.authors.push(person),
                PersonKind::Contributor => self.entry.contributors.push(person),
            },
            AtomElement::Link(link) => self.entry.links.push(link),
            AtomElement::Category(category) => self.entry.categories.push(category),
            AtomElement::Extension(extension) => self.entry.extensions.push(extension),
            other => {
                return Err(Error::TypeMismatch {
                    container: "entry",
                    child: other.describe(),
                });
            },
        }
        Ok(self)
    }

    pub fn build(self) -> Entry {
        self.entry
    }
}

impl_has_common!(Entry => common; EntryBuilder => entry.common);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_tags_text_kinds() {
        let entry = Entry::builder()
            .id("urn:e1")
            .title("Hello")
            .summary("Short")
            .content(Text::html(TextKind::Title, "<p>Long</p>"))
            .updated("2024-01-01T00:00:00Z")
            .build();
        assert_eq!(entry.title().unwrap().kind(), TextKind::Title);
        assert_eq!(entry.summary().unwrap().kind(), TextKind::Summary);
        assert_eq!(entry.content().unwrap().kind(), TextKind::Content);
        assert!(entry.is_complete());
    }

    #[test]
    fn test_missing_fields_in_order() {
        let entry = Entry::builder().build();
        assert_eq!(entry.missing_fields(), vec!["id", "title", "updated"]);
    }

    #[test]
    fn test_has_author_through_source() {
        let plain = Entry::builder().id("urn:e").build();
        assert!(!plain.has_author());

        let sourced = Entry::builder()
            .source(Source::builder().author(Person::author("S").build()).build())
            .build();
        assert!(sourced.has_author());
    }

    #[test]
    fn test_append_rejects_entry() {
        let mut builder = Entry::builder();
        let err = builder.append(Entry::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch: atom:entry cannot contain atom:entry"
        );
    }
}
