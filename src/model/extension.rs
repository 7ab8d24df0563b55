//! Foreign-namespace elements preserved opaquely.

use crate::common::xml::escape_xml;
use std::collections::BTreeMap;

/// An element outside the Atom namespace.
///
/// `xml` holds the complete serialized element, namespace declarations
/// included, and is written back verbatim. `namespace`, `name` and
/// `attributes` describe it without re-parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extension {
    pub(crate) namespace: Option<String>,
    pub(crate) name: String,
    pub(crate) xml: String,
    pub(crate) attributes: BTreeMap<String, String>,
}

impl Extension {
    pub fn builder(namespace: impl Into<String>, name: impl Into<String>) -> ExtensionBuilder {
        ExtensionBuilder {
            extension: Extension {
                namespace: Some(namespace.into()),
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Namespace URI; `None` for an element in no namespace
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw serialized element
    pub fn xml(&self) -> &str {
        &self.xml
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtensionBuilder {
    pub(crate) extension: Extension,
}

impl ExtensionBuilder {
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.extension.namespace = Some(namespace.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.extension.name = name.into();
        self
    }

    /// Serialized element; must be well-formed, self-contained markup
    pub fn xml(mut self, xml: impl Into<String>) -> Self {
        self.extension.xml = xml.into();
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extension.attributes.insert(name.into(), value.into());
        self
    }

    /// Finish the extension. Without explicit `xml`, an empty element is
    /// generated from the namespace, name and attributes.
    pub fn build(mut self) -> Extension {
        let extension = &mut self.extension;
        if extension.xml.is_empty() && !extension.name.is_empty() {
            extension.xml = element_markup(extension);
        }
        self.extension
    }
}

fn element_markup(extension: &Extension) -> String {
    let mut xml = format!(
        "<{} xmlns=\"{}\"",
        extension.name,
        escape_xml(extension.namespace.as_deref().unwrap_or_default())
    );
    for (key, value) in &extension.attributes {
        xml.push_str(&format!(" {key}=\"{}\"", escape_xml(value)));
    }
    xml.push_str("/>");
    xml
}
