//! In-memory XML element tree.
//!
//! The parser reads the whole document into this tree with `quick-xml` and
//! then walks it by recursive descent. Every element carries the complete
//! namespace context in scope at its position, so any subtree can be written
//! back out as self-contained markup.

use super::escape::{escape_xml, unescape_xml};
use super::namespace::{ATOM_NS, NamespaceContext, QualifiedName};
use crate::common::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A child of an element: either a nested element or a run of character data
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// Concrete element with namespace support and ordered mixed content
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag_name: String,
    qualified_name: QualifiedName,
    attributes: Vec<(String, String)>,
    namespace_context: NamespaceContext,
    children: Vec<Node>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>, inherited: NamespaceContext) -> Result<Self> {
        let tag_name = std::str::from_utf8(start.name().as_ref())?.to_string();
        let mut namespace_context = inherited;
        let mut attributes = Vec::new();

        for attr_result in start.attributes() {
            let attr = attr_result?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = unescape_xml(std::str::from_utf8(&attr.value)?);

            // Declarations live in the context, not in the attribute list
            if NamespaceContext::is_declaration(&key) {
                namespace_context.add_namespace(&key, &value);
            } else {
                attributes.push((key, value));
            }
        }

        let qualified_name = namespace_context.element_name(&tag_name);
        Ok(Self {
            tag_name,
            qualified_name,
            attributes,
            namespace_context,
            children: Vec::new(),
        })
    }

    /// Create element tree from an XML string.
    ///
    /// Comments, processing instructions and the XML declaration are dropped;
    /// entity and character references in text and attribute values are
    /// resolved.
    pub fn from_str(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => {
                    let inherited = stack
                        .last()
                        .map(|parent| parent.namespace_context.clone())
                        .unwrap_or_default();
                    stack.push(Element::from_start(e, inherited)?);
                },
                Event::Empty(ref e) => {
                    let inherited = stack
                        .last()
                        .map(|parent| parent.namespace_context.clone())
                        .unwrap_or_default();
                    let element = Element::from_start(e, inherited)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(Node::Element(element)),
                        None => return Ok(element),
                    }
                },
                Event::Text(ref t) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(&unescape_xml(std::str::from_utf8(t)?));
                    }
                },
                Event::GeneralRef(ref r) => {
                    if let Some(current) = stack.last_mut() {
                        let reference = format!("&{};", std::str::from_utf8(r)?);
                        current.push_text(&unescape_xml(&reference));
                    }
                },
                Event::CData(ref c) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(std::str::from_utf8(c)?);
                    }
                },
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(Node::Element(element)),
                            // This is the root element
                            None => return Ok(element),
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Err(Error::Xml("No root element found".to_string()))
    }

    /// Create element tree from XML bytes (must be UTF-8)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let xml = std::str::from_utf8(bytes)?;
        Self::from_str(xml.strip_prefix('\u{feff}').unwrap_or(xml))
    }

    /// Parse a markup fragment the way it reads once embedded in a document.
    ///
    /// Returns a wrapper element holding the fragment's nodes. Fails when the
    /// fragment is not well-formed, uses an undeclared prefix, or resolves to
    /// different names depending on the default namespace in scope.
    pub fn parse_fragment(markup: &str) -> Result<Self> {
        let wrap = |default: &str| {
            Element::from_str(&format!(
                "<fragment xmlns=\"{default}\">{markup}</fragment>"
            ))
        };
        let bare = wrap("")?;
        if bare.inner_xml() != wrap(ATOM_NS)?.inner_xml() {
            return Err(Error::Xml(
                "fragment depends on the default namespace in scope".to_string(),
            ));
        }
        if let Some(prefix) = bare.unbound_prefix() {
            return Err(Error::Xml(format!("undeclared namespace prefix '{prefix}'")));
        }
        Ok(bare)
    }

    /// First prefix in this subtree that resolves to no namespace
    fn unbound_prefix(&self) -> Option<&str> {
        if let Some(prefix) = self.qualified_name.prefix()
            && self.qualified_name.namespace_uri.is_none()
        {
            return Some(prefix);
        }
        for (key, _) in &self.attributes {
            if let Some((prefix, _)) = key.split_once(':')
                && self.namespace_context.resolve_prefix(prefix).is_none()
            {
                return Some(prefix);
            }
        }
        self.child_elements().find_map(Element::unbound_prefix)
    }

    /// Whether the only content is one element, ignoring whitespace
    pub fn has_single_element(&self) -> bool {
        let mut elements = 0;
        for node in &self.children {
            match node {
                Node::Element(_) => elements += 1,
                Node::Text(text) if !text.trim().is_empty() => return false,
                Node::Text(_) => {},
            }
        }
        elements == 1
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }

    /// Get the tag name as written in the document
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Get the qualified name
    pub fn qualified_name(&self) -> &QualifiedName {
        &self.qualified_name
    }

    /// Get the namespace URI
    pub fn namespace_uri(&self) -> Option<&str> {
        self.qualified_name.namespace_uri.as_deref()
    }

    /// Get the local name (without namespace prefix)
    pub fn local_name(&self) -> &str {
        &self.qualified_name.local_name
    }

    /// Get the namespace context
    pub fn namespace_context(&self) -> &NamespaceContext {
        &self.namespace_context
    }

    /// Attributes in document order, namespace declarations excluded
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Get attribute value by name as written
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Get attribute value by namespace and local name
    pub fn attribute_ns(&self, namespace: &str, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| self.namespace_context.attribute_name(key).is(namespace, local_name))
            .map(|(_, value)| value.as_str())
    }

    /// Get all child nodes
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterate over child elements, skipping character data
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated character data of the direct children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Whether the element has child elements or non-whitespace text
    pub fn has_content(&self) -> bool {
        self.children.iter().any(|node| match node {
            Node::Element(_) => true,
            Node::Text(text) => !text.trim().is_empty(),
        })
    }

    /// Serialize this element as self-contained markup.
    ///
    /// Every namespace prefix the subtree uses is declared on the outermost
    /// element that needs it, so the output parses to an equivalent tree in
    /// any context. The default namespace of the outermost unprefixed
    /// element is always declared, `xmlns=""` included.
    pub fn to_xml_string(&self) -> String {
        let mut xml = String::new();
        self.write_scoped(&mut xml, &NamespaceContext::default(), false);
        xml
    }

    /// Serialize the children of this element as self-contained markup
    pub fn inner_xml(&self) -> String {
        let mut xml = String::new();
        let scope = NamespaceContext::default();
        for child in &self.children {
            match child {
                Node::Text(text) => xml.push_str(&escape_xml(text)),
                Node::Element(element) => element.write_scoped(&mut xml, &scope, false),
            }
        }
        xml
    }

    /// `default_known` is false until some ancestor in the output has
    /// declared the default namespace.
    fn write_scoped(&self, output: &mut String, scope: &NamespaceContext, default_known: bool) {
        let mut declared = scope.clone();
        let mut default_known = default_known;
        let mut declarations: Vec<(String, String)> = Vec::new();

        if self.qualified_name.prefix().is_none()
            && (!default_known
                || declared.default_namespace != self.namespace_context.default_namespace)
        {
            let uri = self.namespace_context.default_namespace.clone();
            declarations.push(("xmlns".to_string(), uri.clone().unwrap_or_default()));
            declared.default_namespace = uri;
            default_known = true;
        }

        let used_prefixes = self
            .qualified_name
            .prefix()
            .into_iter()
            .chain(self.attributes.iter().filter_map(|(key, _)| {
                key.split_once(':').map(|(prefix, _)| prefix)
            }));
        for prefix in used_prefixes {
            if let Some(uri) = self.namespace_context.prefixes.get(prefix)
                && declared.prefixes.get(prefix) != Some(uri)
            {
                declarations.push((format!("xmlns:{}", prefix), uri.clone()));
                declared.prefixes.insert(prefix.to_string(), uri.clone());
            }
        }

        // Opening tag
        output.push('<');
        output.push_str(&self.tag_name);
        for (key, value) in declarations.iter().chain(self.attributes.iter()) {
            output.push(' ');
            output.push_str(key);
            output.push_str("=\"");
            output.push_str(&escape_xml(value));
            output.push('"');
        }

        if self.children.is_empty() {
            output.push_str("/>");
            return;
        }
        output.push('>');

        for child in &self.children {
            match child {
                Node::Text(text) => output.push_str(&escape_xml(text)),
                Node::Element(element) => element.write_scoped(output, &declared, default_known),
            }
        }

        // Closing tag
        output.push_str("</");
        output.push_str(&self.tag_name);
        output.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml::namespace::{ATOM_NS, XHTML_NS};

    #[test]
    fn test_namespaces_are_inherited() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:dc="http://purl.org/dc/elements/1.1/">
            <title>T</title><dc:creator>me</dc:creator></feed>"#;
        let root = Element::from_str(xml).unwrap();
        assert!(root.qualified_name().is(ATOM_NS, "feed"));

        let kids: Vec<_> = root.child_elements().collect();
        assert_eq!(kids.len(), 2);
        assert!(kids[0].qualified_name().is(ATOM_NS, "title"));
        assert_eq!(
            kids[1].namespace_uri(),
            Some("http://purl.org/dc/elements/1.1/")
        );
        assert_eq!(kids[1].text(), "me");
    }

    #[test]
    fn test_empty_elements_and_entities() {
        let root = Element::from_str(r#"<a x="1 &amp; 2"><b/>Fish &amp; Chips &#33;</a>"#).unwrap();
        assert_eq!(root.attribute("x"), Some("1 & 2"));
        assert_eq!(root.child_elements().count(), 1);
        assert_eq!(root.text(), "Fish & Chips !");
    }

    #[test]
    fn test_standalone_serialization_declares_namespaces() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:creator role="x">me</dc:creator></feed>"#;
        let root = Element::from_str(xml).unwrap();
        let creator = root.child_elements().next().unwrap();
        assert_eq!(
            creator.to_xml_string(),
            r#"<dc:creator xmlns:dc="http://purl.org/dc/elements/1.1/" role="x">me</dc:creator>"#
        );

        // Serialized form is stable when parsed again
        let again = Element::from_str(&creator.to_xml_string()).unwrap();
        assert_eq!(again.to_xml_string(), creator.to_xml_string());
    }

    #[test]
    fn test_unprefixed_children_keep_inherited_default() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:x="urn:x"><x:ext><inner/></x:ext></feed>"#;
        let root = Element::from_str(xml).unwrap();
        let ext = root.child_elements().next().unwrap();
        assert_eq!(
            ext.to_xml_string(),
            r#"<x:ext xmlns:x="urn:x"><inner xmlns="http://www.w3.org/2005/Atom"/></x:ext>"#
        );
    }

    #[test]
    fn test_unqualified_elements_are_undeclared_explicitly() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:x="urn:x"><x:ext><inner xmlns=""><deep/></inner></x:ext><plain xmlns=""/></feed>"#;
        let root = Element::from_str(xml).unwrap();
        let kids: Vec<_> = root.child_elements().collect();
        assert_eq!(
            kids[0].to_xml_string(),
            r#"<x:ext xmlns:x="urn:x"><inner xmlns=""><deep/></inner></x:ext>"#
        );
        assert_eq!(kids[1].namespace_uri(), None);
        assert_eq!(kids[1].to_xml_string(), r#"<plain xmlns=""/>"#);
    }

    #[test]
    fn test_xhtml_div_markup() {
        let xml = r#"<title type="xhtml" xmlns="http://www.w3.org/2005/Atom"><div xmlns="http://www.w3.org/1999/xhtml">A <b>bold</b> move</div></title>"#;
        let root = Element::from_str(xml).unwrap();
        let div = root.child_elements().next().unwrap();
        assert_eq!(div.namespace_uri(), Some(XHTML_NS));
        assert_eq!(
            div.to_xml_string(),
            r#"<div xmlns="http://www.w3.org/1999/xhtml">A <b>bold</b> move</div>"#
        );
        assert_eq!(
            root.inner_xml(),
            r#"<div xmlns="http://www.w3.org/1999/xhtml">A <b>bold</b> move</div>"#
        );
    }

    #[test]
    fn test_fragment_checks() {
        let div = r#"<div xmlns="http://www.w3.org/1999/xhtml">A <b>bold</b></div>"#;
        let fragment = Element::parse_fragment(div).unwrap();
        assert!(fragment.has_single_element());
        assert_eq!(fragment.inner_xml(), div);

        let pair = Element::parse_fragment(r#"<a xmlns=""/><b xmlns=""/>"#).unwrap();
        assert!(!pair.has_single_element());
        assert!(!Element::parse_fragment("just words").unwrap().has_single_element());

        assert!(matches!(Element::parse_fragment("<a><b>"), Err(Error::Xml(_))));
        assert!(matches!(Element::parse_fragment("<div>x</div>"), Err(Error::Xml(_))));
        assert!(matches!(
            Element::parse_fragment(r#"<ex:a xmlns="">x</ex:a>"#),
            Err(Error::Xml(_))
        ));
        assert!(matches!(
            Element::parse_fragment(r#"<a xmlns="urn:a" ex:b="1"/>"#),
            Err(Error::Xml(_))
        ));
        assert!(Element::parse_fragment(r#"<a xmlns="urn:a" xml:lang="en"/>"#).is_ok());
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(matches!(Element::from_str("<a><b></a>"), Err(Error::Xml(_))));
        assert!(matches!(Element::from_str("   "), Err(Error::Xml(_))));
    }
}
