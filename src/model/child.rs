//! Type-dispatched children for the `append` operation of composite builders.

use super::{Category, Entry, Extension, Generator, Link, Person, PersonKind, Source, Text};

/// Any construct that can be offered to a composite's `append`
#[derive(Debug, Clone, PartialEq)]
pub enum AtomElement {
    Person(Person),
    Link(Link),
    Category(Category),
    Extension(Extension),
    Entry(Entry),
    Generator(Generator),
    Text(Text),
    Source(Source),
}

impl AtomElement {
    /// Element name used in type-mismatch errors
    pub fn describe(&self) -> &'static str {
        match self {
            AtomElement::Person(p) => match p.kind() {
                PersonKind::Author => "atom:author",
                PersonKind::Contributor => "atom:contributor",
            },
            AtomElement::Link(_) => "atom:link",
            AtomElement::Category(_) => "atom:category",
            AtomElement::Extension(_) => "an extension element",
            AtomElement::Entry(_) => "atom:entry",
            AtomElement::Generator(_) => "atom:generator",
            AtomElement::Text(_) => "a text construct",
            AtomElement::Source(_) => "atom:source",
        }
    }
}

macro_rules! atom_element_from {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for AtomElement {
                fn from(value: $variant) -> Self {
                    AtomElement::$variant(value)
                }
            }
        )+
    };
}

atom_element_from!(Person, Link, Category, Extension, Entry, Generator, Text, Source);
