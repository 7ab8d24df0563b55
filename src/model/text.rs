//! Text constructs: `title`, `subtitle`, `summary`, `content` and `rights`.
//!
//! A text construct pairs a value with a content type. The element it is
//! written as is carried explicitly by [`TextKind`] rather than inferred from
//! where the value happens to be stored.

use super::common::{CommonAttributes, Completeness, impl_has_common};

/// Which Atom element a text construct is written as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Title,
    Subtitle,
    Summary,
    Content,
    Rights,
}

impl TextKind {
    /// Local name of the Atom element for this kind
    pub fn element_name(self) -> &'static str {
        match self {
            TextKind::Title => "title",
            TextKind::Subtitle => "subtitle",
            TextKind::Summary => "summary",
            TextKind::Content => "content",
            TextKind::Rights => "rights",
        }
    }

    pub fn from_element_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(TextKind::Title),
            "subtitle" => Some(TextKind::Subtitle),
            "summary" => Some(TextKind::Summary),
            "content" => Some(TextKind::Content),
            "rights" => Some(TextKind::Rights),
            _ => None,
        }
    }
}

/// Value of the `type` attribute of a text construct
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TextType {
    #[default]
    Text,
    Html,
    Xhtml,
    /// Any other media type, e.g. `image/png` or `application/atom+xml`
    Media(String),
}

impl TextType {
    pub fn parse(value: &str) -> Self {
        match value {
            "text" => TextType::Text,
            "html" => TextType::Html,
            "xhtml" => TextType::Xhtml,
            other => TextType::Media(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TextType::Text => "text",
            TextType::Html => "html",
            TextType::Xhtml => "xhtml",
            TextType::Media(media) => media,
        }
    }

    /// Whether this is an XML media type (`*/xml` or `*+xml`), whose content
    /// is embedded markup rather than character data.
    pub fn is_xml_media(&self) -> bool {
        match self {
            TextType::Media(media) => {
                let essence = media.split(';').next().unwrap_or_default().trim();
                essence.ends_with("/xml") || essence.ends_with("+xml")
            },
            _ => false,
        }
    }
}

impl std::fmt::Display for TextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable text with a content type.
///
/// For `text` and `html` the value is character data. For `xhtml` it is the
/// serialized `div` element. For other media types it is either absent (an
/// external `src` reference) or the embedded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) kind: TextKind,
    pub(crate) content_type: TextType,
    pub(crate) text: Option<String>,
    pub(crate) src: Option<String>,
    pub(crate) common: CommonAttributes,
}

impl Text {
    pub fn builder(kind: TextKind) -> TextBuilder {
        TextBuilder::new(kind)
    }

    /// Plain text value
    pub fn plain(kind: TextKind, text: impl Into<String>) -> Self {
        Self::builder(kind).text(text).build()
    }

    /// Escaped HTML value
    pub fn html(kind: TextKind, html: impl Into<String>) -> Self {
        Self::builder(kind)
            .content_type(TextType::Html)
            .text(html)
            .build()
    }

    /// XHTML value; `markup` is the serialized `div` element
    pub fn xhtml(kind: TextKind, markup: impl Into<String>) -> Self {
        Self::builder(kind)
            .content_type(TextType::Xhtml)
            .text(markup)
            .build()
    }

    pub fn kind(&self) -> TextKind {
        self.kind
    }

    pub fn content_type(&self) -> &TextType {
        &self.content_type
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// External content reference (`src`)
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Re-tag this value as another kind of text construct
    pub fn with_kind(mut self, kind: TextKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn into_builder(self) -> TextBuilder {
        TextBuilder { text: self }
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text::plain(TextKind::Title, text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text::plain(TextKind::Title, text)
    }
}

impl Completeness for Text {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.content_type == TextType::Xhtml && self.text.is_none() {
            missing.push("div");
        }
        missing
    }
}

/// Builder for [`Text`]
#[derive(Debug, Clone)]
pub struct TextBuilder {
    pub(crate) text: Text,
}

impl TextBuilder {
    pub fn new(kind: TextKind) -> Self {
        Self {
            text: Text {
                kind,
                content_type: TextType::Text,
                text: None,
                src: None,
                common: CommonAttributes::default(),
            },
        }
    }

    pub fn content_type(mut self, content_type: TextType) -> Self {
        self.text.content_type = content_type;
        self
    }

    /// Set the value; an empty string leaves it unset
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text.text = (!text.is_empty()).then_some(text);
        self
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.text.src = Some(src.into());
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.text.common.base = Some(base.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.text.common.lang = Some(lang.into());
        self
    }

    pub fn build(self) -> Text {
        self.text
    }
}

impl Default for TextBuilder {
    fn default() -> Self {
        Self::new(TextKind::Title)
    }
}

impl_has_common!(Text => common; TextBuilder => text.common);
