//! JSON codec for the document model.
//!
//! Encoding emits an object whose keys are the registered, non-empty fields
//! of the value, nested constructs encoded the same way; arrays keep their
//! order. Decoding accepts JSON text or an already parsed [`Value`] and
//! returns the graph as given: required fields absent from the input stay
//! absent, and checking them is left to [`crate::validate`].
//!
//! # Examples
//!
//! ```
//! use atomfeed::{json, Feed, Person};
//!
//! let feed = Feed::builder()
//!     .id("urn:x")
//!     .author(Person::author("A").build())
//!     .build();
//!
//! let text = json::to_string(&feed)?;
//! assert_eq!(text, r#"{"id":"urn:x","authors":[{"name":"A"}]}"#);
//!
//! let back: Feed = json::from_json(text.as_str())?;
//! assert_eq!(back, feed);
//! # Ok::<(), atomfeed::Error>(())
//! ```

use crate::common::{Error, Result};
use crate::model::{AtomDocument, Person, PersonKind, Text, TextKind};
use crate::reflect::{self, Reflect};
use serde_json::Value;
use tracing::debug;

/// Input accepted by [`from_json`]
#[derive(Debug, Clone)]
pub enum JsonInput<'a> {
    Text(&'a str),
    Value(Value),
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        JsonInput::Text(text)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(text: &'a String) -> Self {
        JsonInput::Text(text.as_str())
    }
}

impl From<Value> for JsonInput<'_> {
    fn from(value: Value) -> Self {
        JsonInput::Value(value)
    }
}

/// Encode any registered model type as a JSON object
pub fn to_value<T: Reflect>(value: &T) -> Value {
    let object = reflect::encode(value);
    debug!(fields = object.len(), "encoded json object");
    Value::Object(object)
}

pub fn to_string<T: Reflect>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(&to_value(value))?)
}

pub fn to_string_pretty<T: Reflect>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_value(value))?)
}

/// Encode the root of a document
pub fn document_to_value(document: &AtomDocument) -> Value {
    match document {
        AtomDocument::Feed(feed) => to_value(feed),
        AtomDocument::Entry(entry) => to_value(entry),
    }
}

/// Decode any registered model type from JSON text or a parsed value.
///
/// The top-level value must be an object. The JSON form of a person or text
/// construct does not record which element it is; nested values get their
/// kind from the field holding them, while a top-level [`Person`] decodes as
/// an author and a top-level [`Text`] as a title. Use [`person_from_json`]
/// or [`text_from_json`] to choose the kind.
pub fn from_json<'a, T: Reflect>(input: impl Into<JsonInput<'a>>) -> Result<T> {
    let value = match input.into() {
        JsonInput::Text(text) => serde_json::from_str(text)?,
        JsonInput::Value(value) => value,
    };
    match value {
        Value::Object(object) => {
            debug!(fields = object.len(), "decoding json object");
            reflect::decode(&object)
        },
        other => Err(Error::InvalidJson {
            field: "<root>".to_string(),
            expected: if other.is_null() { "an object, not null" } else { "an object" },
        }),
    }
}

/// Decode a person as the given kind
pub fn person_from_json<'a>(kind: PersonKind, input: impl Into<JsonInput<'a>>) -> Result<Person> {
    Ok(from_json::<Person>(input)?.with_kind(kind))
}

/// Decode a text construct as the given kind
pub fn text_from_json<'a>(kind: TextKind, input: impl Into<JsonInput<'a>>) -> Result<Text> {
    Ok(from_json::<Text>(input)?.with_kind(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Entry, Extension, Feed, Generator, Link, Source, TextType};
    use serde_json::json;

    fn sample_feed() -> Feed {
        let entry = Entry::builder()
            .id("urn:e1")
            .title(Text::html(TextKind::Title, "<b>One</b>"))
            .updated("2024-01-02T00:00:00Z")
            .published("2024-01-01T00:00:00Z")
            .content(
                Text::builder(TextKind::Content)
                    .content_type(TextType::Media("image/png".into()))
                    .src("https://example.org/i.png")
                    .build(),
            )
            .source(
                Source::builder()
                    .id("urn:origin")
                    .author(Person::author("Origin").build())
                    .build(),
            )
            .contributor(Person::contributor("C").uri("https://c.example/").build())
            .category(Category::builder("news").scheme("urn:s").build())
            .build();

        Feed::builder()
            .id("urn:f")
            .title("Feed")
            .updated("2024-01-02T00:00:00Z")
            .lang("en")
            .generator(Generator::builder().text("gen").version("1.0").build())
            .author(Person::author("A").email("a@example.org").build())
            .link(Link::builder("https://example.org/").rel("alternate").length("10").build())
            .extension(
                Extension::builder("urn:ext", "flag")
                    .attribute("on", "yes")
                    .xml(r#"<flag xmlns="urn:ext" on="yes"/>"#)
                    .build(),
            )
            .entry(entry)
            .build()
    }

    #[test]
    fn test_round_trip() {
        let feed = sample_feed();
        let text = to_string(&feed).unwrap();
        let back: Feed = from_json(&text).unwrap();
        assert_eq!(back, feed);

        let from_value: Feed = from_json(to_value(&feed)).unwrap();
        assert_eq!(from_value, feed);
    }

    #[test]
    fn test_encoded_shape() {
        let value = to_value(&sample_feed());
        assert_eq!(value["lang"], json!("en"));
        assert_eq!(value["title"], json!({"type": "text", "text": "Feed"}));
        assert_eq!(value["generator"], json!({"text": "gen", "version": "1.0"}));
        assert_eq!(
            value["extensions"],
            json!([{
                "attributes": {"on": "yes"},
                "namespace": "urn:ext",
                "name": "flag",
                "xml": "<flag xmlns=\"urn:ext\" on=\"yes\"/>"
            }])
        );
        let entry = &value["entries"][0];
        assert_eq!(
            entry["content"],
            json!({"type": "image/png", "src": "https://example.org/i.png"})
        );
        assert!(entry.get("summary").is_none());
        assert!(value.get("subtitle").is_none());
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let entry: Entry = from_json(r#"{"title": "Only a title", "links": []}"#).unwrap();
        assert_eq!(entry.id(), None);
        assert!(entry.links().is_empty());
        assert_eq!(entry.title().unwrap().kind(), TextKind::Title);
        assert_eq!(entry.title().unwrap().text(), Some("Only a title"));
        assert_eq!(to_value(&entry), json!({"title": {"type": "text", "text": "Only a title"}}));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(from_json::<Feed>("{not json"), Err(Error::Json(_))));
        assert!(matches!(
            from_json::<Feed>("[1, 2]"),
            Err(Error::InvalidJson { .. })
        ));
        let err = from_json::<Feed>(json!({"entries": [1]})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid JSON for field 'entries': expected an object"
        );
    }

    #[test]
    fn test_standalone_person_and_text_kinds() {
        let contributor = Person::contributor("C").build();
        let text = to_string(&contributor).unwrap();

        let default: Person = from_json(&text).unwrap();
        assert_eq!(default.kind(), PersonKind::Author);

        let back = person_from_json(PersonKind::Contributor, &text).unwrap();
        assert_eq!(back, contributor);

        let summary = Text::html(TextKind::Summary, "<b>s</b>");
        let back = text_from_json(TextKind::Summary, to_value(&summary)).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_document_root() {
        let document = AtomDocument::Entry(Entry::builder().id("urn:e").build());
        assert_eq!(document_to_value(&document), json!({"id": "urn:e"}));
    }

    mod properties {
        use super::*;
        use crate::model::strategies;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn prop_json_round_trips(feed in strategies::feed()) {
                let text = to_string(&feed).unwrap();
                let back: Feed = from_json(&text).unwrap();
                prop_assert_eq!(back, feed);
            }

            #[test]
            fn prop_absent_fields_are_not_emitted(entry in strategies::entry()) {
                let value = to_value(&entry);
                let object = value.as_object().unwrap();
                prop_assert_eq!(object.contains_key("source"), entry.source().is_some());
                prop_assert_eq!(object.contains_key("authors"), !entry.authors().is_empty());
                prop_assert_eq!(object.contains_key("lang"), entry.common.lang.is_some());
                for (_, field) in object {
                    prop_assert!(!field.is_null());
                }
            }
        }
    }
}
