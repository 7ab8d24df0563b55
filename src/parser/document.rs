//! Sub-parsers for the composite constructs: feed, entry and source.

use super::constructs::{category, extension, generator, link, person};
use super::{Context, indexed_path, is_atom, simple, text};
use crate::common::xml::Element;
use crate::model::{Entry, Feed, PersonKind, Source, TextKind};
use tracing::trace;

pub(super) fn feed(ctx: &mut Context<'_>, element: &Element, path: &str) -> Feed {
    let mut feed = Feed {
        common: ctx.attributes(path, element, &[]),
        ..Feed::default()
    };

    for child in element.child_elements() {
        trace!(parent = path, child = child.tag_name(), "feed child");
        if !is_atom(child) {
            feed.extensions.push(extension(child));
            continue;
        }
        match child.local_name() {
            "id" => ctx.single(path, child, &mut feed.id, simple(child)),
            "updated" => {
                let updated = ctx.date(path, child);
                ctx.single(path, child, &mut feed.updated, updated);
            },
            "title" | "subtitle" | "rights" => {
                let kind = TextKind::from_element_name(child.local_name()).unwrap_or(TextKind::Title);
                let value = text::parse(ctx, child, path, kind);
                let slot = match kind {
                    TextKind::Subtitle => &mut feed.subtitle,
                    TextKind::Rights => &mut feed.rights,
                    _ => &mut feed.title,
                };
                ctx.single(path, child, slot, value);
            },
            "generator" => {
                let value = generator(ctx, child, path);
                ctx.single(path, child, &mut feed.generator, value);
            },
            "icon" => ctx.single(path, child, &mut feed.icon, simple(child)),
            "logo" => ctx.single(path, child, &mut feed.logo, simple(child)),
            "author" => {
                let child_path = indexed_path(path, child, feed.authors.len() + 1);
                feed.authors.push(person(ctx, child, &child_path, PersonKind::Author));
            },
            "contributor" => {
                let child_path = indexed_path(path, child, feed.contributors.len() + 1);
                feed.contributors
                    .push(person(ctx, child, &child_path, PersonKind::Contributor));
            },
            "link" => {
                let child_path = indexed_path(path, child, feed.links.len() + 1);
                feed.links.push(link(ctx, child, &child_path));
            },
            "category" => {
                let child_path = indexed_path(path, child, feed.categories.len() + 1);
                feed.categories.push(category(ctx, child, &child_path));
            },
            "entry" => {
                let child_path = indexed_path(path, child, feed.entries.len() + 1);
                feed.entries.push(entry(ctx, child, &child_path));
            },
            _ => ctx.unknown_element(path, child),
        }
    }

    feed
}

pub(super) fn entry(ctx: &mut Context<'_>, element: &Element, path: &str) -> Entry {
    let mut entry = Entry {
        common: ctx.attributes(path, element, &[]),
        ..Entry::default()
    };

    for child in element.child_elements() {
        trace!(parent = path, child = child.tag_name(), "entry child");
        if !is_atom(child) {
            entry.extensions.push(extension(child));
            continue;
        }
        match child.local_name() {
            "id" => ctx.single(path, child, &mut entry.id, simple(child)),
            "updated" | "published" => {
                let value = ctx.date(path, child);
                let slot = if child.local_name() == "updated" {
                    &mut entry.updated
                } else {
                    &mut entry.published
                };
                ctx.single(path, child, slot, value);
            },
            "title" | "rights" | "summary" | "content" => {
                let kind = TextKind::from_element_name(child.local_name()).unwrap_or(TextKind::Title);
                let value = text::parse(ctx, child, path, kind);
                let slot = match kind {
                    TextKind::Rights => &mut entry.rights,
                    TextKind::Summary => &mut entry.summary,
                    TextKind::Content => &mut entry.content,
                    _ => &mut entry.title,
                };
                ctx.single(path, child, slot, value);
            },
            "source" => {
                let child_path = format!("{path}/source");
                let value = source(ctx, child, &child_path);
                ctx.single(path, child, &mut entry.source, value);
            },
            "author" => {
                let child_path = indexed_path(path, child, entry.authors.len() + 1);
                entry.authors.push(person(ctx, child, &child_path, PersonKind::Author));
            },
            "contributor" => {
                let child_path = indexed_path(path, child, entry.contributors.len() + 1);
                entry
                    .contributors
                    .push(person(ctx, child, &child_path, PersonKind::Contributor));
            },
            "link" => {
                let child_path = indexed_path(path, child, entry.links.len() + 1);
                entry.links.push(link(ctx, child, &child_path));
            },
            "category" => {
                let child_path = indexed_path(path, child, entry.categories.len() + 1);
                entry.categories.push(category(ctx, child, &child_path));
            },
            _ => ctx.unknown_element(path, child),
        }
    }

    entry
}

/// Parse an `atom:source`, returning the instance it populated
pub(super) fn source(ctx: &mut Context<'_>, element: &Element, path: &str) -> Source {
    let mut source = Source {
        common: ctx.attributes(path, element, &[]),
        ..Source::default()
    };

    for child in element.child_elements() {
        trace!(parent = path, child = child.tag_name(), "source child");
        if !is_atom(child) {
            source.extensions.push(extension(child));
            continue;
        }
        match child.local_name() {
            "id" => ctx.single(path, child, &mut source.id, simple(child)),
            "updated" => {
                let updated = ctx.date(path, child);
                ctx.single(path, child, &mut source.updated, updated);
            },
            "title" | "subtitle" | "rights" => {
                let kind = TextKind::from_element_name(child.local_name()).unwrap_or(TextKind::Title);
                let value = text::parse(ctx, child, path, kind);
                let slot = match kind {
                    TextKind::Subtitle => &mut source.subtitle,
                    TextKind::Rights => &mut source.rights,
                    _ => &mut source.title,
                };
                ctx.single(path, child, slot, value);
            },
            "generator" => {
                let value = generator(ctx, child, path);
                ctx.single(path, child, &mut source.generator, value);
            },
            "icon" => ctx.single(path, child, &mut source.icon, simple(child)),
            "logo" => ctx.single(path, child, &mut source.logo, simple(child)),
            "author" => {
                let child_path = indexed_path(path, child, source.authors.len() + 1);
                source.authors.push(person(ctx, child, &child_path, PersonKind::Author));
            },
            "contributor" => {
                let child_path = indexed_path(path, child, source.contributors.len() + 1);
                source
                    .contributors
                    .push(person(ctx, child, &child_path, PersonKind::Contributor));
            },
            "link" => {
                let child_path = indexed_path(path, child, source.links.len() + 1);
                source.links.push(link(ctx, child, &child_path));
            },
            "category" => {
                let child_path = indexed_path(path, child, source.categories.len() + 1);
                source.categories.push(category(ctx, child, &child_path));
            },
            _ => ctx.unknown_element(path, child),
        }
    }

    source
}
