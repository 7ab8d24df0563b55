//! Typed document model for every Atom construct.
//!
//! The model has no parsing or serialization logic. Entities are immutable
//! once built; each has a builder that stays mutable until `build()`.
//! Collections keep insertion order and allow duplicates.

mod category;
mod child;
pub mod common;
mod entry;
mod extension;
mod feed;
mod generator;
mod link;
mod person;
mod source;
#[cfg(test)]
pub(crate) mod strategies;
mod text;

pub use category::{Category, CategoryBuilder};
pub use child::AtomElement;
pub use common::{CommonAttributes, Completeness, HasCommon};
pub use entry::{Entry, EntryBuilder};
pub use extension::{Extension, ExtensionBuilder};
pub use feed::{Feed, FeedBuilder};
pub use generator::{Generator, GeneratorBuilder};
pub use link::{Link, LinkBuilder};
pub use person::{Person, PersonBuilder, PersonKind};
pub use source::{Source, SourceBuilder};
pub use text::{Text, TextBuilder, TextKind, TextType};

/// A parsed or to-be-written Atom document: a feed or a standalone entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomDocument {
    Feed(Feed),
    Entry(Entry),
}

impl AtomDocument {
    pub fn as_feed(&self) -> Option<&Feed> {
        match self {
            AtomDocument::Feed(feed) => Some(feed),
            AtomDocument::Entry(_) => None,
        }
    }

    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            AtomDocument::Entry(entry) => Some(entry),
            AtomDocument::Feed(_) => None,
        }
    }

    pub fn into_feed(self) -> Option<Feed> {
        match self {
            AtomDocument::Feed(feed) => Some(feed),
            AtomDocument::Entry(_) => None,
        }
    }

    pub fn into_entry(self) -> Option<Entry> {
        match self {
            AtomDocument::Entry(entry) => Some(entry),
            AtomDocument::Feed(_) => None,
        }
    }

    /// Local name of the root element
    pub fn root_name(&self) -> &'static str {
        match self {
            AtomDocument::Feed(_) => "feed",
            AtomDocument::Entry(_) => "entry",
        }
    }
}

impl From<Feed> for AtomDocument {
    fn from(feed: Feed) -> Self {
        AtomDocument::Feed(feed)
    }
}

impl From<Entry> for AtomDocument {
    fn from(entry: Entry) -> Self {
        AtomDocument::Entry(entry)
    }
}
