//! Person constructs (`author` and `contributor`).

use super::common::{CommonAttributes, Completeness, impl_has_common, require};
use super::extension::Extension;

/// Role of a person construct; selects the element it is written as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonKind {
    Author,
    Contributor,
}

impl PersonKind {
    pub fn element_name(self) -> &'static str {
        match self {
            PersonKind::Author => "author",
            PersonKind::Contributor => "contributor",
        }
    }
}

/// A named author or contributor with optional URI and email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub(crate) kind: PersonKind,
    pub(crate) name: Option<String>,
    pub(crate) uri: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) extensions: Vec<Extension>,
    pub(crate) common: CommonAttributes,
}

impl Person {
    /// Start building an author
    pub fn author(name: impl Into<String>) -> PersonBuilder {
        PersonBuilder::new(PersonKind::Author).name(name)
    }

    /// Start building a contributor
    pub fn contributor(name: impl Into<String>) -> PersonBuilder {
        PersonBuilder::new(PersonKind::Contributor).name(name)
    }

    pub fn kind(&self) -> PersonKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn with_kind(mut self, kind: PersonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn into_builder(self) -> PersonBuilder {
        PersonBuilder { person: self }
    }
}

impl Completeness for Person {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "name", self.name());
        missing
    }
}

/// Builder for [`Person`]
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    pub(crate) person: Person,
}

impl PersonBuilder {
    pub fn new(kind: PersonKind) -> Self {
        Self {
            person: Person {
                kind,
                name: None,
                uri: None,
                email: None,
                extensions: Vec::new(),
                common: CommonAttributes::default(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.person.name = Some(name.into());
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.person.uri = Some(uri.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.person.email = Some(email.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.person.extensions.push(extension);
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.person.common.base = Some(base.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.person.common.lang = Some(lang.into());
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new(PersonKind::Author)
    }
}

impl_has_common!(Person => common; PersonBuilder => person.common);
