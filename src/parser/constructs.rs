//! Sub-parsers for the leaf constructs.

use super::{Context, child_path, is_atom, simple};
use crate::common::xml::Element;
use crate::model::{Category, Extension, Generator, Link, Person, PersonBuilder, PersonKind};
use std::collections::BTreeMap;

const LINK_ATTRIBUTES: &[&str] = &["href", "rel", "type", "hreflang", "title", "length"];
const CATEGORY_ATTRIBUTES: &[&str] = &["term", "scheme", "label"];
const GENERATOR_ATTRIBUTES: &[&str] = &["uri", "version"];

pub(super) fn person(
    ctx: &mut Context<'_>,
    element: &Element,
    path: &str,
    kind: PersonKind,
) -> Person {
    let mut person = PersonBuilder::new(kind).person;
    person.common = ctx.attributes(path, element, &[]);

    for child in element.child_elements() {
        if !is_atom(child) {
            person.extensions.push(extension(child));
            continue;
        }
        match child.local_name() {
            "name" => ctx.single(path, child, &mut person.name, simple(child)),
            "uri" => ctx.single(path, child, &mut person.uri, simple(child)),
            "email" => ctx.single(path, child, &mut person.email, simple(child)),
            _ => ctx.unknown_element(path, child),
        }
    }

    person
}

pub(super) fn link(ctx: &mut Context<'_>, element: &Element, path: &str) -> Link {
    let attribute = |name: &str| element.attribute(name).map(str::to_string);
    Link {
        href: attribute("href"),
        rel: attribute("rel"),
        media_type: attribute("type"),
        hreflang: attribute("hreflang"),
        title: attribute("title"),
        length: attribute("length"),
        common: ctx.attributes(path, element, LINK_ATTRIBUTES),
    }
}

pub(super) fn category(ctx: &mut Context<'_>, element: &Element, path: &str) -> Category {
    let attribute = |name: &str| element.attribute(name).map(str::to_string);
    Category {
        term: attribute("term"),
        scheme: attribute("scheme"),
        label: attribute("label"),
        common: ctx.attributes(path, element, CATEGORY_ATTRIBUTES),
    }
}

/// `parent` is the path of the enclosing feed or source
pub(super) fn generator(ctx: &mut Context<'_>, element: &Element, parent: &str) -> Generator {
    let path = child_path(parent, element);
    let text = simple(element);
    Generator {
        text: (!text.is_empty()).then_some(text),
        uri: element.attribute("uri").map(str::to_string),
        version: element.attribute("version").map(str::to_string),
        common: ctx.attributes(&path, element, GENERATOR_ATTRIBUTES),
    }
}

/// Capture a foreign-namespace element verbatim
pub(super) fn extension(element: &Element) -> Extension {
    let attributes: BTreeMap<String, String> = element
        .attributes()
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Extension {
        namespace: element.namespace_uri().map(str::to_string),
        name: element.local_name().to_string(),
        xml: element.to_xml_string(),
        attributes,
    }
}
