//! Emitters for the leaf constructs.

use crate::common::xml::XmlWriter;
use crate::model::{Category, CommonAttributes, Extension, Generator, Link, Person, Text, TextType};

pub(super) fn common(w: &mut XmlWriter, common: &CommonAttributes) {
    w.attr_opt("xml:base", common.base.as_deref())
        .attr_opt("xml:lang", common.lang.as_deref());
}

pub(super) fn simple(w: &mut XmlWriter, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        w.text_element(name, value);
    }
}

pub(super) fn text(w: &mut XmlWriter, text: Option<&Text>) {
    let Some(text) = text else {
        return;
    };
    let name = text.kind().element_name();
    let content_type = text.content_type();

    w.start(name);
    if *content_type != TextType::Text {
        w.attr("type", content_type.as_str());
    }
    w.attr_opt("src", text.src());
    common(w, &text.common);

    if let Some(value) = text.text() {
        if *content_type == TextType::Xhtml || content_type.is_xml_media() {
            w.raw(value);
        } else {
            w.text(value);
        }
    }
    w.end(name);
}

pub(super) fn people(w: &mut XmlWriter, people: &[Person]) {
    for person in people {
        let name = person.kind().element_name();
        w.start(name);
        common(w, &person.common);
        simple(w, "name", person.name());
        simple(w, "uri", person.uri());
        simple(w, "email", person.email());
        extensions(w, person.extensions());
        w.end(name);
    }
}

pub(super) fn links(w: &mut XmlWriter, links: &[Link]) {
    for link in links {
        w.start("link")
            .attr_opt("href", link.href())
            .attr_opt("rel", link.rel())
            .attr_opt("type", link.media_type())
            .attr_opt("hreflang", link.hreflang())
            .attr_opt("title", link.title())
            .attr_opt("length", link.length());
        common(w, &link.common);
        w.end("link");
    }
}

pub(super) fn categories(w: &mut XmlWriter, categories: &[Category]) {
    for category in categories {
        w.start("category")
            .attr_opt("term", category.term())
            .attr_opt("scheme", category.scheme())
            .attr_opt("label", category.label());
        common(w, &category.common);
        w.end("category");
    }
}

pub(super) fn generator(w: &mut XmlWriter, generator: Option<&Generator>) {
    let Some(generator) = generator else {
        return;
    };
    w.start("generator")
        .attr_opt("uri", generator.uri())
        .attr_opt("version", generator.version());
    common(w, &generator.common);
    if let Some(text) = generator.text() {
        w.text(text);
    }
    w.end("generator");
}

/// Extensions are written back exactly as captured
pub(super) fn extensions(w: &mut XmlWriter, extensions: &[Extension]) {
    for extension in extensions {
        w.raw(extension.xml());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextKind;

    fn written(f: impl FnOnce(&mut XmlWriter)) -> String {
        let mut w = XmlWriter::new();
        f(&mut w);
        w.finish()
    }

    #[test]
    fn test_text_types() {
        let plain = Text::plain(TextKind::Title, "a < b");
        assert_eq!(written(|w| text(w, Some(&plain))), "<title>a &lt; b</title>");

        let html = Text::html(TextKind::Summary, "<p>x</p>");
        assert_eq!(
            written(|w| text(w, Some(&html))),
            r#"<summary type="html">&lt;p&gt;x&lt;/p&gt;</summary>"#
        );

        let div = r#"<div xmlns="http://www.w3.org/1999/xhtml">x</div>"#;
        let xhtml = Text::xhtml(TextKind::Content, div);
        assert_eq!(
            written(|w| text(w, Some(&xhtml))),
            format!(r#"<content type="xhtml">{div}</content>"#)
        );

        let external = Text::builder(TextKind::Content)
            .content_type(TextType::Media("image/png".into()))
            .src("https://example.org/i.png")
            .build();
        assert_eq!(
            written(|w| text(w, Some(&external))),
            r#"<content type="image/png" src="https://example.org/i.png"/>"#
        );
    }

    #[test]
    fn test_optional_attributes_are_omitted() {
        let link = Link::builder("https://example.org/").rel("self").build();
        assert_eq!(
            written(|w| links(w, &[link])),
            r#"<link href="https://example.org/" rel="self"/>"#
        );

        let category = Category::builder("rust").lang("en").build();
        assert_eq!(
            written(|w| categories(w, &[category])),
            r#"<category term="rust" xml:lang="en"/>"#
        );
    }

    #[test]
    fn test_person() {
        let person = Person::contributor("Ann").email("ann@example.org").build();
        assert_eq!(
            written(|w| people(w, &[person])),
            "<contributor><name>Ann</name><email>ann@example.org</email></contributor>"
        );
    }
}
