//! HTML serialization of element trees.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serialize an element tree without internal ids.
pub fn to_html(root: &Element) -> String {
    HtmlWriter::new().write(root)
}

/// Serializes element trees to HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlWriter {
    include_ids: bool,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit each element's internal id as an `id` attribute, so a host can
    /// map DOM events back onto the tree.
    pub fn with_ids(mut self, include_ids: bool) -> Self {
        self.include_ids = include_ids;
        self
    }

    pub fn write(&self, root: &Element) -> String {
        let mut out = String::new();
        self.write_element(root, &mut out);
        out
    }

    fn write_element(&self, element: &Element, out: &mut String) {
        if element.is_fragment() {
            self.write_content(element, out);
            return;
        }

        out.push('<');
        out.push_str(&element.tag);

        if self.include_ids {
            push_attr(out, "id", &element.id);
        }
        if !element.classes.is_empty() {
            push_attr(out, "class", &element.classes.join(" "));
        }
        for (key, value) in &element.attrs {
            push_attr(out, key, value);
        }
        for (key, value) in &element.data {
            push_attr(out, &format!("data-{key}"), value);
        }
        out.push('>');

        self.write_content(element, out);

        // Writing to a String never fails
        let _ = write!(out, "</{}>", element.tag);
    }

    fn write_content(&self, element: &Element, out: &mut String) {
        match &element.content {
            Content::None => {}
            Content::Text(text) => out.push_str(&escape_html(text)),
            Content::Raw(markup) => out.push_str(markup),
            Content::Children(children) => {
                for child in children {
                    self.write_element(child, out);
                }
            }
        }
    }
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    let _ = write!(out, r#" {}="{}""#, key, escape_html(value));
}
