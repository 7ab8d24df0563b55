//! `atom:link` references to related resources.

use super::common::{CommonAttributes, Completeness, impl_has_common, require};

/// A reference from a feed or entry to a Web resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub(crate) href: Option<String>,
    pub(crate) rel: Option<String>,
    pub(crate) media_type: Option<String>,
    pub(crate) hreflang: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) length: Option<String>,
    pub(crate) common: CommonAttributes,
}

impl Link {
    pub fn builder(href: impl Into<String>) -> LinkBuilder {
        LinkBuilder::default().href(href)
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Link relation; absent means `alternate`
    pub fn rel(&self) -> Option<&str> {
        self.rel.as_deref()
    }

    /// Advisory media type (`type` attribute)
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn hreflang(&self) -> Option<&str> {
        self.hreflang.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Advisory length in octets
    pub fn length(&self) -> Option<&str> {
        self.length.as_deref()
    }
}

impl Completeness for Link {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "href", self.href());
        missing
    }
}

/// Builder for [`Link`]
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    pub(crate) link: Link,
}

impl LinkBuilder {
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.link.href = Some(href.into());
        self
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.link.rel = Some(rel.into());
        self
    }

    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.link.media_type = Some(media_type.into());
        self
    }

    pub fn hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.link.hreflang = Some(hreflang.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.link.title = Some(title.into());
        self
    }

    pub fn length(mut self, length: impl Into<String>) -> Self {
        self.link.length = Some(length.into());
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.link.common.base = Some(base.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.link.common.lang = Some(lang.into());
        self
    }

    pub fn build(self) -> Link {
        self.link
    }
}

impl_has_common!(Link => common; LinkBuilder => link.common);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_builder() {
        let link = Link::builder("https://example.org/")
            .rel("alternate")
            .media_type("text/html")
            .length("1024")
            .build();
        assert_eq!(link.href(), Some("https://example.org/"));
        assert_eq!(link.media_type(), Some("text/html"));
        assert_eq!(link.hreflang(), None);
        assert!(link.is_complete());
        assert_eq!(LinkBuilder::default().build().missing_fields(), vec!["href"]);
    }
}
