//! `atom:source`: a denormalized snapshot of the feed an entry came from.

use super::child::AtomElement;
use super::common::{CommonAttributes, Completeness, impl_has_common};
use super::{Category, Extension, Generator, Link, Person, PersonKind, Text, TextKind};
use crate::common::{Error, Result};

/// Feed metadata copied into an entry. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<Text>,
    pub(crate) subtitle: Option<Text>,
    pub(crate) rights: Option<Text>,
    pub(crate) updated: Option<String>,
    pub(crate) generator: Option<Generator>,
    pub(crate) icon: Option<String>,
    pub(crate) logo: Option<String>,
    pub(crate) authors: Vec<Person>,
    pub(crate) contributors: Vec<Person>,
    pub(crate) links: Vec<Link>,
    pub(crate) categories: Vec<Category>,
    pub(crate) extensions: Vec<Extension>,
    pub(crate) common: CommonAttributes,
}

impl Source {
    pub fn builder() -> SourceBuilder {
        SourceBuilder::default()
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

    pub fn rights(&self) -> Option<&Text> {
        self.rights.as_ref()
    }

    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
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

    pub fn into_builder(self) -> SourceBuilder {
        SourceBuilder { source: self }
    }
}

impl Completeness for Source {
    fn missing_fields(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// Builder for [`Source`]
#[derive(Debug, Clone, Default)]
pub struct SourceBuilder {
    pub(crate) source: Source,
}

impl SourceBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.source.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<Text>) -> Self {
        self.source.title = Some(title.into().with_kind(TextKind::Title));
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<Text>) -> Self {
        self.source.subtitle = Some(subtitle.into().with_kind(TextKind::Subtitle));
        self
    }

    pub fn rights(mut self, rights: impl Into<Text>) -> Self {
        self.source.rights = Some(rights.into().with_kind(TextKind::Rights));
        self
    }

    pub fn updated(mut self, updated: impl Into<String>) -> Self {
        self.source.updated = Some(updated.into());
        self
    }

    pub fn generator(mut self, generator: Generator) -> Self {
        self.source.generator = Some(generator);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.source.icon = Some(icon.into());
        self
    }

    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.source.logo = Some(logo.into());
        self
    }

    pub fn author(mut self, author: Person) -> Self {
        self.source.authors.push(author.with_kind(PersonKind::Author));
        self
    }

    pub fn contributor(mut self, contributor: Person) -> Self {
        self.source
            .contributors
            .push(contributor.with_kind(PersonKind::Contributor));
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.source.links.push(link);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.source.categories.push(category);
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.source.extensions.push(extension);
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.source.common.base = Some(base.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.source.common.lang = Some(lang.into());
        self
    }

    /// Add a child to the collection matching its type.
    ///
    /// Accepts authors, contributors, links, categories and extensions.
    pub fn append(&mut self, child: impl Into<AtomElement>) -> Result<&mut Self> {
        match child.into() {
            AtomElement::Person(person) => match person.kind() {
                PersonKind::Author => self.source.authors.push(person),
                PersonKind::Contributor => self.source.contributors.push(person),
            },
            AtomElement::Link(link) => self.source.links.push(link),
            AtomElement::Category(category) => self.source.categories.push(category),
            AtomElement::Extension(extension) => self.source.extensions.push(extension),
            other => {
                return Err(Error::TypeMismatch {
                    container: "source",
                    child: other.describe(),
                });
            },
        }
        Ok(self)
    }

    pub fn build(self) -> Source {
        self.source
    }
}

impl_has_common!(Source => common; SourceBuilder => source.common);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_dispatches_by_type() {
        let mut builder = Source::builder().id("urn:source");
        builder
            .append(Person::author("A").build())
            .unwrap()
            .append(Person::contributor("C").build())
            .unwrap()
            .append(Link::builder("https://example.org/").build())
            .unwrap();
        let source = builder.build();
        assert_eq!(source.authors().len(), 1);
        assert_eq!(source.contributors().len(), 1);
        assert_eq!(source.links().len(), 1);
    }

    #[test]
    fn test_append_rejects_generator() {
        let mut builder = Source::builder();
        let err = builder
            .append(Generator::builder().text("x").build())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                container: "source",
                child: "atom:generator"
            }
        ));
    }
}
