//! `atom:category` classification tags.

use super::common::{CommonAttributes, Completeness, impl_has_common, require};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub(crate) term: Option<String>,
    pub(crate) scheme: Option<String>,
    pub(crate) label: Option<String>,
    pub(crate) common: CommonAttributes,
}

impl Category {
    pub fn builder(term: impl Into<String>) -> CategoryBuilder {
        CategoryBuilder::default().term(term)
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Completeness for Category {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "term", self.term());
        missing
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryBuilder {
    pub(crate) category: Category,
}

impl CategoryBuilder {
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.category.term = Some(term.into());
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.category.scheme = Some(scheme.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.category.label = Some(label.into());
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.category.common.base = Some(base.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.category.common.lang = Some(lang.into());
        self
    }

    pub fn build(self) -> Category {
        self.category
    }
}

impl_has_common!(Category => common; CategoryBuilder => category.common);
