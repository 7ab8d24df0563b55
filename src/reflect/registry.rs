//! Field tables for every model type.

use super::{Decode, Property, Reflect, array, common, inherit, invalid, list, nested, object, string};
use crate::common::Result;
use crate::model::{
    Category, CategoryBuilder, Entry, EntryBuilder, Extension, ExtensionBuilder, Feed, FeedBuilder,
    Generator, GeneratorBuilder, Link, LinkBuilder, Person, PersonBuilder, PersonKind, Source,
    SourceBuilder, Text, TextBuilder, TextKind, TextType,
};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};

/// A string field stored as `Option<String>` on both the entity and its
/// builder
macro_rules! string_property {
    ($ty:ty, $builder:ty, $name:literal, $($field:ident).+ => $($target:ident).+) => {
        Property {
            name: $name,
            encode: |value: &$ty| string(value.$($field).+.as_deref()),
            decode: Decode::Text(|builder: &mut $builder, v: String| builder.$($target).+ = Some(v)),
        }
    };
}

macro_rules! reflect {
    ($ty:ty, $builder:ty, $table:ident, |$b:ident| $finish:expr) => {
        impl Reflect for $ty {
            type Builder = $builder;

            fn properties() -> &'static [Property<Self>] {
                &$table
            }

            fn finish($b: Self::Builder) -> Self {
                $finish
            }
        }
    };
}

/// A text construct may be given as a bare string
fn text(field: &'static str, value: &Value, kind: TextKind) -> Result<Text> {
    match value {
        Value::String(s) => Ok(Text::plain(kind, s.as_str())),
        _ => Ok(nested::<Text>(field, value)?.with_kind(kind)),
    }
}

fn people(field: &'static str, value: &Value, kind: PersonKind) -> Result<Vec<Person>> {
    Ok(list::<Person>(field, value)?
        .into_iter()
        .map(|person| person.with_kind(kind))
        .collect())
}

static FEED: Lazy<Vec<Property<Feed>>> = Lazy::new(|| {
    inherit(
        common(),
        vec![
            string_property!(Feed, FeedBuilder, "id", id => feed.id),
            string_property!(Feed, FeedBuilder, "updated", updated => feed.updated),
            Property {
                name: "title",
                encode: |feed: &Feed| object(feed.title.as_ref()),
                decode: Decode::Hook(feed_hook),
            },
            Property {
                name: "subtitle",
                encode: |feed: &Feed| object(feed.subtitle.as_ref()),
                decode: Decode::Hook(feed_hook),
            },
            Property {
                name: "rights",
                encode: |feed: &Feed| object(feed.rights.as_ref()),
                decode: Decode::Hook(feed_hook),
            },
            Property {
                name: "generator",
                encode: |feed: &Feed| object(feed.generator.as_ref()),
                decode: Decode::Hook(feed_hook),
            },
            string_property!(Feed, FeedBuilder, "logo", logo => feed.logo),
            string_property!(Feed, FeedBuilder, "icon", icon => feed.icon),
            Property {
                name: "authors",
                encode: |feed: &Feed| array(&feed.authors),
                decode: Decode::Hook(feed_hook),
            },
            Property {
                name: "contributors",
                encode: |feed: &Feed| array(&feed.contributors),
                decode: Decode::Hook(feed_hook),
            },
            Property {
                name: "links",
                encode: |feed: &Feed| array(&feed.links),
                decode: Decode::Hook(feed_hook),
            },
            Property {
                name: "categories",
                encode: |feed: &Feed| array(&feed.categories),
                decode: Decode::Hook(feed_hook),
            },
            Property {
                name: "extensions",
                encode: |feed: &Feed| array(&feed.extensions),
                decode: Decode::Hook(feed_hook),
            },
            Property {
                name: "entries",
                encode: |feed: &Feed| array(&feed.entries),
                decode: Decode::Hook(feed_hook),
            },
        ],
    )
});

fn feed_hook(builder: &mut FeedBuilder, field: &'static str, value: &Value) -> Result<()> {
    let feed = &mut builder.feed;
    match field {
        "title" => feed.title = Some(text(field, value, TextKind::Title)?),
        "subtitle" => feed.subtitle = Some(text(field, value, TextKind::Subtitle)?),
        "rights" => feed.rights = Some(text(field, value, TextKind::Rights)?),
        "generator" => feed.generator = Some(nested(field, value)?),
        "authors" => feed.authors = people(field, value, PersonKind::Author)?,
        "contributors" => feed.contributors = people(field, value, PersonKind::Contributor)?,
        "links" => feed.links = list(field, value)?,
        "categories" => feed.categories = list(field, value)?,
        "extensions" => feed.extensions = list(field, value)?,
        "entries" => feed.entries = list(field, value)?,
        _ => {},
    }
    Ok(())
}

reflect!(Feed, FeedBuilder, FEED, |builder| builder.build());

static ENTRY: Lazy<Vec<Property<Entry>>> = Lazy::new(|| {
    inherit(
        common(),
        vec![
            string_property!(Entry, EntryBuilder, "id", id => entry.id),
            Property {
                name: "title",
                encode: |entry: &Entry| object(entry.title.as_ref()),
                decode: Decode::Hook(entry_hook),
            },
            Property {
                name: "source",
                encode: |entry: &Entry| object(entry.source.as_ref()),
                decode: Decode::Hook(entry_hook),
            },
            string_property!(Entry, EntryBuilder, "updated", updated => entry.updated),
            string_property!(Entry, EntryBuilder, "published", published => entry.published),
            Property {
                name: "authors",
                encode: |entry: &Entry| array(&entry.authors),
                decode: Decode::Hook(entry_hook),
            },
            Property {
                name: "contributors",
                encode: |entry: &Entry| array(&entry.contributors),
                decode: Decode::Hook(entry_hook),
            },
            Property {
                name: "content",
                encode: |entry: &Entry| object(entry.content.as_ref()),
                decode: Decode::Hook(entry_hook),
            },
            Property {
                name: "summary",
                encode: |entry: &Entry| object(entry.summary.as_ref()),
                decode: Decode::Hook(entry_hook),
            },
            Property {
                name: "rights",
                encode: |entry: &Entry| object(entry.rights.as_ref()),
                decode: Decode::Hook(entry_hook),
            },
            Property {
                name: "categories",
                encode: |entry: &Entry| array(&entry.categories),
                decode: Decode::Hook(entry_hook),
            },
            Property {
                name: "links",
                encode: |entry: &Entry| array(&entry.links),
                decode: Decode::Hook(entry_hook),
            },
            Property {
                name: "extensions",
                encode: |entry: &Entry| array(&entry.extensions),
                decode: Decode::Hook(entry_hook),
            },
        ],
    )
});

fn entry_hook(builder: &mut EntryBuilder, field: &'static str, value: &Value) -> Result<()> {
    let entry = &mut builder.entry;
    match field {
        "title" => entry.title = Some(text(field, value, TextKind::Title)?),
        "content" => entry.content = Some(text(field, value, TextKind::Content)?),
        "summary" => entry.summary = Some(text(field, value, TextKind::Summary)?),
        "rights" => entry.rights = Some(text(field, value, TextKind::Rights)?),
        "source" => entry.source = Some(nested(field, value)?),
        "authors" => entry.authors = people(field, value, PersonKind::Author)?,
        "contributors" => entry.contributors = people(field, value, PersonKind::Contributor)?,
        "links" => entry.links = list(field, value)?,
        "categories" => entry.categories = list(field, value)?,
        "extensions" => entry.extensions = list(field, value)?,
        _ => {},
    }
    Ok(())
}

reflect!(Entry, EntryBuilder, ENTRY, |builder| builder.build());

static SOURCE: Lazy<Vec<Property<Source>>> = Lazy::new(|| {
    inherit(
        common(),
        vec![
            string_property!(Source, SourceBuilder, "id", id => source.id),
            Property {
                name: "title",
                encode: |source: &Source| object(source.title.as_ref()),
                decode: Decode::Hook(source_hook),
            },
            Property {
                name: "subtitle",
                encode: |source: &Source| object(source.subtitle.as_ref()),
                decode: Decode::Hook(source_hook),
            },
            Property {
                name: "rights",
                encode: |source: &Source| object(source.rights.as_ref()),
                decode: Decode::Hook(source_hook),
            },
            Property {
                name: "generator",
                encode: |source: &Source| object(source.generator.as_ref()),
                decode: Decode::Hook(source_hook),
            },
            string_property!(Source, SourceBuilder, "updated", updated => source.updated),
            string_property!(Source, SourceBuilder, "logo", logo => source.logo),
            string_property!(Source, SourceBuilder, "icon", icon => source.icon),
            Property {
                name: "authors",
                encode: |source: &Source| array(&source.authors),
                decode: Decode::Hook(source_hook),
            },
            Property {
                name: "contributors",
                encode: |source: &Source| array(&source.contributors),
                decode: Decode::Hook(source_hook),
            },
            Property {
                name: "links",
                encode: |source: &Source| array(&source.links),
                decode: Decode::Hook(source_hook),
            },
            Property {
                name: "categories",
                encode: |source: &Source| array(&source.categories),
                decode: Decode::Hook(source_hook),
            },
            Property {
                name: "extensions",
                encode: |source: &Source| array(&source.extensions),
                decode: Decode::Hook(source_hook),
            },
        ],
    )
});

fn source_hook(builder: &mut SourceBuilder, field: &'static str, value: &Value) -> Result<()> {
    let source = &mut builder.source;
    match field {
        "title" => source.title = Some(text(field, value, TextKind::Title)?),
        "subtitle" => source.subtitle = Some(text(field, value, TextKind::Subtitle)?),
        "rights" => source.rights = Some(text(field, value, TextKind::Rights)?),
        "generator" => source.generator = Some(nested(field, value)?),
        "authors" => source.authors = people(field, value, PersonKind::Author)?,
        "contributors" => source.contributors = people(field, value, PersonKind::Contributor)?,
        "links" => source.links = list(field, value)?,
        "categories" => source.categories = list(field, value)?,
        "extensions" => source.extensions = list(field, value)?,
        _ => {},
    }
    Ok(())
}

reflect!(Source, SourceBuilder, SOURCE, |builder| builder.build());

static PERSON: Lazy<Vec<Property<Person>>> = Lazy::new(|| {
    inherit(
        common(),
        vec![
            string_property!(Person, PersonBuilder, "name", name => person.name),
            string_property!(Person, PersonBuilder, "uri", uri => person.uri),
            string_property!(Person, PersonBuilder, "email", email => person.email),
            Property {
                name: "extensions",
                encode: |person: &Person| array(&person.extensions),
                decode: Decode::Hook(|builder: &mut PersonBuilder, field: &'static str, value: &Value| -> Result<()> {
                    builder.person.extensions = list(field, value)?;
                    Ok(())
                }),
            },
        ],
    )
});

reflect!(Person, PersonBuilder, PERSON, |builder| builder.build());

static LINK: Lazy<Vec<Property<Link>>> = Lazy::new(|| {
    inherit(
        common(),
        vec![
            string_property!(Link, LinkBuilder, "href", href => link.href),
            string_property!(Link, LinkBuilder, "rel", rel => link.rel),
            string_property!(Link, LinkBuilder, "type", media_type => link.media_type),
            string_property!(Link, LinkBuilder, "hreflang", hreflang => link.hreflang),
            string_property!(Link, LinkBuilder, "title", title => link.title),
            string_property!(Link, LinkBuilder, "length", length => link.length),
        ],
    )
});

reflect!(Link, LinkBuilder, LINK, |builder| builder.build());

static CATEGORY: Lazy<Vec<Property<Category>>> = Lazy::new(|| {
    inherit(
        common(),
        vec![
            string_property!(Category, CategoryBuilder, "term", term => category.term),
            string_property!(Category, CategoryBuilder, "scheme", scheme => category.scheme),
            string_property!(Category, CategoryBuilder, "label", label => category.label),
        ],
    )
});

reflect!(Category, CategoryBuilder, CATEGORY, |builder| builder.build());

static TEXT: Lazy<Vec<Property<Text>>> = Lazy::new(|| {
    inherit(
        common(),
        vec![
            Property {
                name: "type",
                encode: |text: &Text| Some(Value::String(text.content_type.as_str().to_string())),
                decode: Decode::Text(|builder: &mut TextBuilder, value: String| {
                    builder.text.content_type = TextType::parse(&value)
                }),
            },
            string_property!(Text, TextBuilder, "text", text => text.text),
            string_property!(Text, TextBuilder, "src", src => text.src),
        ],
    )
});

reflect!(Text, TextBuilder, TEXT, |builder| builder.build());

static GENERATOR: Lazy<Vec<Property<Generator>>> = Lazy::new(|| {
    inherit(
        common(),
        vec![
            string_property!(Generator, GeneratorBuilder, "text", text => generator.text),
            string_property!(Generator, GeneratorBuilder, "uri", uri => generator.uri),
            string_property!(Generator, GeneratorBuilder, "version", version => generator.version),
        ],
    )
});

reflect!(Generator, GeneratorBuilder, GENERATOR, |builder| builder.build());

/// Extensions are not Atom constructs and carry no common attributes
static EXTENSION: Lazy<Vec<Property<Extension>>> = Lazy::new(|| {
    vec![
        Property {
            name: "attributes",
            encode: |extension: &Extension| {
                (!extension.attributes.is_empty()).then(|| {
                    Value::Object(
                        extension
                            .attributes
                            .iter()
                            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                            .collect::<Map<String, Value>>(),
                    )
                })
            },
            decode: Decode::Hook(|builder: &mut ExtensionBuilder, field: &'static str, value: &Value| -> Result<()> {
                let Value::Object(map) = value else {
                    return Err(invalid(field, "an object of strings"));
                };
                for (key, value) in map {
                    let Value::String(value) = value else {
                        return Err(invalid(field, "an object of strings"));
                    };
                    builder.extension.attributes.insert(key.clone(), value.clone());
                }
                Ok(())
            }),
        },
        string_property!(Extension, ExtensionBuilder, "namespace", namespace => extension.namespace),
        Property {
            name: "name",
            encode: |extension: &Extension| string(Some(extension.name.as_str())),
            decode: Decode::Text(|builder: &mut ExtensionBuilder, name: String| {
                builder.extension.name = name
            }),
        },
        Property {
            name: "xml",
            encode: |extension: &Extension| string(Some(extension.xml.as_str())),
            decode: Decode::Text(|builder: &mut ExtensionBuilder, xml: String| {
                builder.extension.xml = xml
            }),
        },
    ]
});

reflect!(Extension, ExtensionBuilder, EXTENSION, |builder| builder.build());
