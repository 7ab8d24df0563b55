//! Property reflection for the JSON codec.
//!
//! Every model type registers, once, an ordered table of the fields that make
//! up its JSON contract. A table row pairs a field name with an encoder
//! (entity to JSON value) and a decoder (JSON value into the type's builder).
//! Scalar fields decode directly; nested and repeated fields go through a
//! per-type hook that materializes the right model type, e.g. an array of
//! objects under `authors` becomes a list of author [`Person`]s.
//!
//! Tables are composed rather than declared flat: every Atom construct starts
//! from the shared `base`/`lang` rows and appends its own, so the registration
//! of a construct is its supertype's fields followed by its own.
//!
//! [`Person`]: crate::model::Person

mod registry;

use crate::common::{Error, Result};
use crate::model::HasCommon;
use serde_json::{Map, Value};

/// A type with a registered JSON field table
pub trait Reflect: Sized + 'static {
    /// Mutable form the decoder fills in
    type Builder: Default;

    /// Registered fields, in encoding order
    fn properties() -> &'static [Property<Self>];

    /// Freeze a decoded builder
    fn finish(builder: Self::Builder) -> Self;
}

/// One registered field
pub struct Property<T: Reflect> {
    pub name: &'static str,
    /// Value to emit, `None` when the field is absent or empty
    pub encode: fn(&T) -> Option<Value>,
    pub decode: Decode<T::Builder>,
}

/// How a field is read back
pub enum Decode<B> {
    /// Store the string form of a scalar value
    Text(fn(&mut B, String)),
    /// Resolve a nested value; receives the field name and the raw value
    Hook(fn(&mut B, &'static str, &Value) -> Result<()>),
}

/// Walk the table of `T`, emitting every present, non-empty field
pub fn encode<T: Reflect>(value: &T) -> Map<String, Value> {
    T::properties()
        .iter()
        .filter_map(|property| (property.encode)(value).map(|v| (property.name.to_string(), v)))
        .collect()
}

/// Build a `T` from the registered fields of `object`.
///
/// Keys outside the table are ignored. `null`, empty strings, arrays and
/// objects count as absent.
pub fn decode<T: Reflect>(object: &Map<String, Value>) -> Result<T> {
    let mut builder = T::Builder::default();
    for property in T::properties() {
        let Some(value) = object.get(property.name) else {
            continue;
        };
        if is_empty(value) {
            continue;
        }
        match property.decode {
            Decode::Text(set) => set(&mut builder, scalar(property.name, value)?),
            Decode::Hook(hook) => hook(&mut builder, property.name, value)?,
        }
    }
    Ok(T::finish(builder))
}

/// Append `own` to the `base` registration
pub(crate) fn inherit<T: Reflect>(base: Vec<Property<T>>, own: Vec<Property<T>>) -> Vec<Property<T>> {
    base.into_iter().chain(own).collect()
}

/// The `base` and `lang` rows shared by every Atom construct
pub(crate) fn common<T>() -> Vec<Property<T>>
where
    T: Reflect + HasCommon,
    T::Builder: HasCommon,
{
    vec![
        Property {
            name: "base",
            encode: |value: &T| string(value.common().base.as_deref()),
            decode: Decode::Text(|builder: &mut T::Builder, base: String| {
                builder.common_mut().base = Some(base)
            }),
        },
        Property {
            name: "lang",
            encode: |value: &T| string(value.common().lang.as_deref()),
            decode: Decode::Text(|builder: &mut T::Builder, lang: String| {
                builder.common_mut().lang = Some(lang)
            }),
        },
    ]
}

pub(crate) fn string(value: Option<&str>) -> Option<Value> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| Value::String(v.to_string()))
}

pub(crate) fn object<X: Reflect>(value: Option<&X>) -> Option<Value> {
    let map = encode(value?);
    (!map.is_empty()).then_some(Value::Object(map))
}

pub(crate) fn array<X: Reflect>(values: &[X]) -> Option<Value> {
    (!values.is_empty()).then(|| {
        Value::Array(
            values
                .iter()
                .map(|value| Value::Object(encode(value)))
                .collect(),
        )
    })
}

pub(crate) fn nested<X: Reflect>(field: &'static str, value: &Value) -> Result<X> {
    match value {
        Value::Object(map) => decode(map),
        _ => Err(invalid(field, "an object")),
    }
}

pub(crate) fn list<X: Reflect>(field: &'static str, value: &Value) -> Result<Vec<X>> {
    match value {
        Value::Array(items) => items.iter().map(|item| nested(field, item)).collect(),
        _ => Err(invalid(field, "an array of objects")),
    }
}

fn scalar(field: &'static str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(invalid(field, "a string")),
    }
}

pub(crate) fn invalid(field: &str, expected: &'static str) -> Error {
    Error::InvalidJson {
        field: field.to_string(),
        expected,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Entry, Feed, Person, PersonKind, Source};
    use serde_json::json;

    fn names<T: Reflect>() -> Vec<&'static str> {
        T::properties().iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_registrations_extend_common_fields() {
        assert_eq!(names::<Person>(), vec!["base", "lang", "name", "uri", "email", "extensions"]);
        assert_eq!(names::<Category>(), vec!["base", "lang", "term", "scheme", "label"]);
        assert_eq!(
            names::<Feed>(),
            vec![
                "base", "lang", "id", "updated", "title", "subtitle", "rights", "generator",
                "logo", "icon", "authors", "contributors", "links", "categories", "extensions",
                "entries"
            ]
        );
        assert_eq!(&names::<Source>()[..4], &["base", "lang", "id", "title"]);
    }

    #[test]
    fn test_encode_omits_empty_fields() {
        let entry = Entry::builder()
            .id("urn:e")
            .title("")
            .author(Person::author("A").build())
            .build();
        let map = encode(&entry);
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "title", "authors"]);
        assert_eq!(map["title"], json!({"type": "text"}));
        assert_eq!(map["authors"], json!([{"name": "A"}]));
    }

    #[test]
    fn test_decode_materializes_nested_types() {
        let object = json!({
            "id": "urn:e",
            "updated": "",
            "authors": [{"name": "A"}],
            "contributors": [{"name": "C"}],
            "links": [{"href": "https://example.org/", "length": 42}],
            "unknown": true
        });
        let entry: Entry = decode(object.as_object().unwrap()).unwrap();
        assert_eq!(entry.id(), Some("urn:e"));
        assert_eq!(entry.updated(), None);
        assert_eq!(entry.authors()[0].kind(), PersonKind::Author);
        assert_eq!(entry.contributors()[0].kind(), PersonKind::Contributor);
        assert_eq!(entry.links()[0].length(), Some("42"));
    }

    #[test]
    fn test_wrong_shapes_are_rejected() {
        let bad_list = json!({"authors": {"name": "A"}});
        let err = decode::<Entry>(bad_list.as_object().unwrap()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid JSON for field 'authors': expected an array of objects"
        );

        let bad_scalar = json!({"id": ["x"]});
        assert!(matches!(
            decode::<Entry>(bad_scalar.as_object().unwrap()),
            Err(Error::InvalidJson { .. })
        ));
    }
}
