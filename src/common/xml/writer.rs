//! Minimal XML output buffer.
//!
//! Writes compact markup (no indentation) into a `String`. Callers are
//! responsible for balancing `start`/`end`; the writer only tracks whether the
//! current start tag is still open so attributes can be appended to it.

use super::escape::escape_xml;

#[derive(Debug, Default)]
pub struct XmlWriter {
    output: String,
    open_tag: bool,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the `<?xml ...?>` declaration
    pub fn declaration(&mut self) -> &mut Self {
        self.output
            .push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        self
    }

    /// Open a start tag; attributes may follow until content is written
    pub fn start(&mut self, name: &str) -> &mut Self {
        self.close_open_tag();
        self.output.push('<');
        self.output.push_str(name);
        self.open_tag = true;
        self
    }

    /// Add an attribute to the open start tag
    pub fn attr(&mut self, name: &str, value: &str) -> &mut Self {
        debug_assert!(self.open_tag, "attribute written outside a start tag");
        self.output.push(' ');
        self.output.push_str(name);
        self.output.push_str("=\"");
        self.output.push_str(&escape_xml(value));
        self.output.push('"');
        self
    }

    /// Add an attribute only when a value is present
    pub fn attr_opt(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.attr(name, value);
        }
        self
    }

    /// Write escaped character data
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.close_open_tag();
        self.output.push_str(&escape_xml(text));
        self
    }

    /// Write pre-serialized markup verbatim
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.close_open_tag();
        self.output.push_str(markup);
        self
    }

    /// Close the element opened by the matching `start`
    pub fn end(&mut self, name: &str) -> &mut Self {
        if self.open_tag {
            self.output.push_str("/>");
            self.open_tag = false;
        } else {
            self.output.push_str("</");
            self.output.push_str(name);
            self.output.push('>');
        }
        self
    }

    /// Write `<name>text</name>`
    pub fn text_element(&mut self, name: &str, text: &str) -> &mut Self {
        self.start(name).text(text).end(name)
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn close_open_tag(&mut self) {
        if self.open_tag {
            self.output.push('>');
            self.open_tag = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_output() {
        let mut w = XmlWriter::new();
        w.start("feed").attr("xmlns", "urn:a");
        w.text_element("id", "a&b");
        w.start("link").attr("href", "http://x/?a=1&b=2").end("link");
        w.start("empty").text("").end("empty");
        w.end("feed");
        assert_eq!(
            w.finish(),
            r#"<feed xmlns="urn:a"><id>a&amp;b</id><link href="http://x/?a=1&amp;b=2"/><empty></empty></feed>"#
        );
    }

    #[test]
    fn test_optional_attributes_are_omitted() {
        let mut w = XmlWriter::new();
        w.start("category")
            .attr("term", "rust")
            .attr_opt("scheme", None)
            .attr_opt("label", Some("Rust"))
            .end("category");
        assert_eq!(w.finish(), r#"<category term="rust" label="Rust"/>"#);
    }
}
