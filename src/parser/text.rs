//! Text construct parsing.
//!
//! | `type`            | `src`   | value                                   |
//! |-------------------|---------|-----------------------------------------|
//! | absent, `text`, `html` | no | decoded character content               |
//! | `xhtml`           | any     | serialized first child element (`div`)  |
//! | media type        | yes     | none; content triggers a warning        |
//! | XML media type    | no      | serialized child markup                 |
//! | other media type  | no      | character content (e.g. base64)         |

use super::{Context, child_path};
use crate::common::xml::{Element, XHTML_NS};
use crate::model::{Text, TextKind, TextType};

pub(super) fn parse(ctx: &mut Context<'_>, element: &Element, parent: &str, kind: TextKind) -> Text {
    let path = child_path(parent, element);
    let known: &[&str] = if kind == TextKind::Content {
        &["type", "src"]
    } else {
        &["type"]
    };
    let common = ctx.attributes(&path, element, known);
    let content_type = element
        .attribute("type")
        .map(|value| TextType::parse(value.trim()))
        .unwrap_or_default();
    let src = if kind == TextKind::Content {
        element.attribute("src").map(str::to_string)
    } else {
        None
    };

    let value = match (&content_type, &src) {
        (TextType::Xhtml, _) => xhtml(ctx, element, &path),
        (_, Some(_)) => {
            if element.has_content() {
                ctx.warn(&path, element, "non-empty content with external reference");
            }
            None
        },
        (TextType::Text | TextType::Html, None) => {
            if element.child_elements().next().is_some() {
                ctx.warn(&path, element, "markup inside a text construct is ignored");
            }
            non_empty(element.text())
        },
        (media, None) if media.is_xml_media() => non_empty(element.inner_xml()),
        (_, None) => non_empty(element.text()),
    };

    Text {
        kind,
        content_type,
        text: value,
        src,
        common,
    }
}

/// Empty content reads as no value, matching what the writer emits for one
fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// First child element, serialized; `None` lets validation report the
/// missing `div`
fn xhtml(ctx: &mut Context<'_>, element: &Element, path: &str) -> Option<String> {
    let mut children = element.child_elements();
    let div = children.next()?;
    if !div.qualified_name().is(XHTML_NS, "div") {
        ctx.warn(path, div, "xhtml content is not wrapped in an XHTML div");
    }
    if children.next().is_some() {
        ctx.warn(path, element, "only the first child element of xhtml content is kept");
    }
    Some(div.to_xml_string())
}
