//! Proptest strategies generating valid document graphs.
//!
//! Every generated graph passes validation, keeps simple values free of
//! surrounding whitespace, and has no empty optional strings, so it survives
//! both the XML and the JSON round trip unchanged.

use super::*;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Whitespace-free value for identifiers, URIs, names and terms
pub(crate) fn token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9._:/-]{0,15}"
}

/// Free text including characters that need escaping
pub(crate) fn words() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9<>&][a-zA-Z0-9 <>&'\"]{0,20}"
}

pub(crate) fn date() -> impl Strategy<Value = String> {
    "20[0-9]{2}-(0[1-9]|1[0-2])-(0[1-9]|1[0-9]|2[0-8])T([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]Z"
}

pub(crate) fn common() -> impl Strategy<Value = CommonAttributes> {
    (
        option::of("https://[a-z]{1,8}\\.example/"),
        option::of("[a-z]{2}"),
    )
        .prop_map(|(base, lang)| CommonAttributes { base, lang })
}

pub(crate) fn text(kind: TextKind) -> impl Strategy<Value = Text> {
    prop_oneof![
        (words(), common()).prop_map(move |(value, common)| Text {
            common,
            ..Text::plain(kind, value)
        }),
        words().prop_map(move |value| Text::html(kind, value)),
        "[a-zA-Z0-9]{1,12}".prop_map(move |value| {
            Text::xhtml(
                kind,
                format!(r#"<div xmlns="http://www.w3.org/1999/xhtml">{value}</div>"#),
            )
        }),
    ]
}

pub(crate) fn content() -> impl Strategy<Value = Text> {
    prop_oneof![
        text(TextKind::Content),
        token().prop_map(|src| {
            Text::builder(TextKind::Content)
                .content_type(TextType::Media("image/png".to_string()))
                .src(format!("https://example.org/{src}"))
                .build()
        }),
    ]
}

pub(crate) fn extension() -> impl Strategy<Value = Extension> {
    ("[a-z]{1,8}", "[a-zA-Z0-9]{1,8}", "[a-zA-Z0-9]{1,8}").prop_map(|(name, value, body)| {
        Extension {
            namespace: Some("urn:ext".to_string()),
            xml: format!(r#"<ex:{name} xmlns:ex="urn:ext" a="{value}">{body}</ex:{name}>"#),
            attributes: BTreeMap::from([("a".to_string(), value)]),
            name,
        }
    })
}

pub(crate) fn person(kind: PersonKind) -> impl Strategy<Value = Person> {
    (
        token(),
        option::of(token()),
        option::of(token()),
        vec(extension(), 0..2),
        common(),
    )
        .prop_map(move |(name, uri, email, extensions, common)| Person {
            kind,
            name: Some(name),
            uri,
            email,
            extensions,
            common,
        })
}

pub(crate) fn link() -> impl Strategy<Value = Link> {
    (
        token(),
        option::of("alternate|self|related|enclosure"),
        option::of("text/html|audio/mpeg"),
        option::of("[a-z]{2}"),
        option::of(words()),
        option::of("[1-9][0-9]{0,5}"),
        common(),
    )
        .prop_map(|(href, rel, media_type, hreflang, title, length, common)| Link {
            href: Some(href),
            rel,
            media_type,
            hreflang,
            title,
            length,
            common,
        })
}

pub(crate) fn category() -> impl Strategy<Value = Category> {
    (token(), option::of(token()), option::of(words()), common()).prop_map(
        |(term, scheme, label, common)| Category {
            term: Some(term),
            scheme,
            label,
            common,
        },
    )
}

pub(crate) fn generator() -> impl Strategy<Value = Generator> {
    (token(), option::of(token()), option::of("[0-9]\\.[0-9]"), common()).prop_map(
        |(text, uri, version, common)| Generator {
            text: Some(text),
            uri,
            version,
            common,
        },
    )
}

/// Always carries an `id`, since an empty source encodes to nothing
pub(crate) fn source() -> impl Strategy<Value = Source> {
    (
        token().prop_map(Some),
        option::of(text(TextKind::Title)),
        option::of(date()),
        option::of(generator()),
        vec(person(PersonKind::Author), 0..2),
        vec(link(), 0..2),
        vec(extension(), 0..2),
    )
        .prop_map(|(id, title, updated, generator, authors, links, extensions)| Source {
            id,
            title,
            updated,
            generator,
            authors,
            links,
            extensions,
            ..Source::default()
        })
}

pub(crate) fn entry() -> impl Strategy<Value = Entry> {
    (
        (
            token(),
            text(TextKind::Title),
            date(),
            option::of(date()),
            option::of(text(TextKind::Rights)),
            option::of(text(TextKind::Summary)),
            option::of(content()),
            option::of(source()),
        ),
        (
            vec(person(PersonKind::Author), 0..2),
            vec(person(PersonKind::Contributor), 0..2),
            vec(link(), 0..3),
            vec(category(), 0..2),
            vec(extension(), 0..2),
            common(),
        ),
    )
        .prop_map(
            |(
                (id, title, updated, published, rights, summary, content, source),
                (authors, contributors, links, categories, extensions, common),
            )| Entry {
                id: Some(id),
                title: Some(title),
                updated: Some(updated),
                published,
                rights,
                summary,
                content,
                source,
                authors,
                contributors,
                links,
                categories,
                extensions,
                common,
            },
        )
}

/// A feed with at least one author, so every entry resolves one
pub(crate) fn feed() -> impl Strategy<Value = Feed> {
    (
        (
            token(),
            text(TextKind::Title),
            date(),
            option::of(text(TextKind::Subtitle)),
            option::of(text(TextKind::Rights)),
            option::of(generator()),
            option::of(token()),
            option::of(token()),
        ),
        (
            vec(person(PersonKind::Author), 1..3),
            vec(person(PersonKind::Contributor), 0..2),
            vec(link(), 0..3),
            vec(category(), 0..3),
            vec(extension(), 0..2),
            vec(entry(), 0..4),
            common(),
        ),
    )
        .prop_map(
            |(
                (id, title, updated, subtitle, rights, generator, icon, logo),
                (authors, contributors, links, categories, extensions, entries, common),
            )| Feed {
                id: Some(id),
                title: Some(title),
                subtitle,
                updated: Some(updated),
                rights,
                generator,
                icon,
                logo,
                authors,
                contributors,
                links,
                categories,
                extensions,
                entries,
                common,
            },
        )
}
