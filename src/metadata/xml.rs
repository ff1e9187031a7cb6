//! Minimal XML element tree with an indenting writer.

use std::fmt::Write;

/// An XML element with attributes, optional text, and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn render_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", indent, self.name);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }

        match (&self.text, self.children.is_empty()) {
            (None, true) => out.push_str("/>\n"),
            (Some(text), true) => {
                let _ = writeln!(out, ">{}</{}>", escape(text), self.name);
            }
            (text, false) => {
                out.push_str(">\n");
                if let Some(text) = text {
                    let _ = writeln!(out, "{}  {}", indent, escape(text));
                }
                for child in &self.children {
                    child.render_into(out, depth + 1);
                }
                let _ = writeln!(out, "{}</{}>", indent, self.name);
            }
        }
    }
}

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
