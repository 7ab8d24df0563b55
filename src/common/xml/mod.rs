//! XML infrastructure: escaping, namespaces, the element tree the parser walks
//! and the output buffer the writer fills.

mod escape;
pub mod element;
pub mod namespace;
pub mod writer;

pub use element::{Element, Node};
pub use escape::{escape_xml, unescape_xml};
pub use namespace::{ATOM_NS, NamespaceContext, QualifiedName, XHTML_NS, XML_NS};
pub use writer::XmlWriter;
