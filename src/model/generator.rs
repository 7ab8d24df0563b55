//! `atom:generator`: the agent that produced a feed.

use super::common::{CommonAttributes, Completeness, impl_has_common};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generator {
    pub(crate) text: Option<String>,
    pub(crate) uri: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) common: CommonAttributes,
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    /// Human-readable name of the generating agent
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

// No mandatory fields
impl Completeness for Generator {
    fn missing_fields(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    pub(crate) generator: Generator,
}

impl GeneratorBuilder {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.generator.text = Some(text.into());
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.generator.uri = Some(uri.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.generator.version = Some(version.into());
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.generator.common.base = Some(base.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.generator.common.lang = Some(lang.into());
        self
    }

    pub fn build(self) -> Generator {
        self.generator
    }
}

impl_has_common!(Generator => common; GeneratorBuilder => generator.common);
