//! Namespace handling utilities for XML elements.
//!
//! This module provides qualified names and a scoped namespace context used to
//! decide which elements belong to the Atom vocabulary and which are
//! extensions.
//!
//! # References
//!
//! - RFC 4287 section 2: the Atom namespace
//! - Namespaces in XML 1.0: prefix scoping and the reserved `xml` prefix

use phf::{Map, phf_map};
use std::collections::BTreeMap;

/// Atom syndication format namespace
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// XHTML namespace
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// XML namespace (bound to the reserved `xml` prefix)
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Prefixes bound without a declaration (compile-time perfect hash map)
static PREDECLARED: Map<&'static str, &'static str> = phf_map! {
    "xml" => "http://www.w3.org/XML/1998/namespace",
};

/// Qualified name with namespace support
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    /// Namespace URI
    pub namespace_uri: Option<String>,
    /// Local name (without prefix)
    pub local_name: String,
    /// Full qualified name (with prefix if present)
    pub qualified_name: String,
}

impl QualifiedName {
    /// The prefix part of the name, if any
    pub fn prefix(&self) -> Option<&str> {
        self.qualified_name
            .find(':')
            .map(|colon| &self.qualified_name[..colon])
    }

    /// Check if this name is `local_name` in `namespace`
    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace_uri.as_deref() == Some(namespace) && self.local_name == local_name
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.qualified_name)
    }
}

/// Namespace context for resolving prefixes to URIs.
///
/// A context holds every binding in scope at one element: children start from
/// a clone of their parent's context and layer their own declarations on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceContext {
    /// Mapping from prefix to namespace URI
    pub prefixes: BTreeMap<String, String>,
    /// Default namespace URI
    pub default_namespace: Option<String>,
}

impl NamespaceContext {
    /// Add a namespace declaration given the declaring attribute name
    /// (`xmlns` or `xmlns:prefix`) and its value.
    ///
    /// An empty `xmlns=""` undeclares the default namespace.
    pub fn add_namespace(&mut self, attr_name: &str, uri: &str) {
        if attr_name == "xmlns" {
            self.default_namespace = (!uri.is_empty()).then(|| uri.to_string());
        } else if let Some(prefix) = attr_name.strip_prefix("xmlns:") {
            self.prefixes.insert(prefix.to_string(), uri.to_string());
        }
    }

    /// Resolve prefix to namespace URI
    pub fn resolve_prefix(&self, prefix: &str) -> Option<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .or_else(|| PREDECLARED.get(prefix).copied())
    }

    /// Get default namespace
    pub fn default_namespace(&self) -> Option<&str> {
        self.default_namespace.as_deref()
    }

    /// Parse an element name with this context.
    ///
    /// Unprefixed element names take the default namespace.
    pub fn element_name(&self, name: &str) -> QualifiedName {
        self.qualify(name, true)
    }

    /// Parse an attribute name with this context.
    ///
    /// Unprefixed attribute names are in no namespace.
    pub fn attribute_name(&self, name: &str) -> QualifiedName {
        self.qualify(name, false)
    }

    /// Check if a name is a namespace declaration attribute
    pub fn is_declaration(name: &str) -> bool {
        name == "xmlns" || name.starts_with("xmlns:")
    }

    fn qualify(&self, name: &str, use_default: bool) -> QualifiedName {
        match name.split_once(':') {
            Some((prefix, local_name)) => QualifiedName {
                namespace_uri: self.resolve_prefix(prefix).map(str::to_string),
                local_name: local_name.to_string(),
                qualified_name: name.to_string(),
            },
            None => QualifiedName {
                namespace_uri: if use_default {
                    self.default_namespace.clone()
                } else {
                    None
                },
                local_name: name.to_string(),
                qualified_name: name.to_string(),
            },
        }
    }
}
