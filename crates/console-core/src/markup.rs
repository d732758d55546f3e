//! Markup tree produced by the bindings and consumed by the DOM host.
//!
//! Components that build markup procedurally (links, the instance grid) return
//! a [`Markup`] tree rather than a string, so the host decides when and where it
//! lands in the document. Serialization escapes text and attribute values; no
//! other sanitizing happens in the binding layer.

use std::fmt;

/// A node in a markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element(Element),
    Text(String),
}

/// An element with ordered attributes and child nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Markup>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value in place
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a class token. Empty tokens are ignored.
    pub fn class(mut self, token: impl AsRef<str>) -> Self {
        let token = token.as_ref().trim();
        if token.is_empty() {
            return self;
        }
        let classes = match self.get_attr("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, token),
            _ => token.to_string(),
        };
        self.set_attr("class", classes);
        self
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Markup::Text(text.into()))
    }

    pub fn push(&mut self, child: impl Into<Markup>) {
        self.children.push(child.into());
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|t| t == token))
            .unwrap_or(false)
    }

    pub fn children(&self) -> &[Markup] {
        &self.children
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Markup::as_element)
    }

    /// Concatenated text of every descendant text node
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, true, out);
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl Markup {
    pub fn text(text: impl Into<String>) -> Self {
        Markup::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Markup::Element(el) => Some(el),
            Markup::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Markup::Element(el) => el.text_content(),
            Markup::Text(text) => text.clone(),
        }
    }

    /// Depth-first list of this node and every descendant element
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        if let Markup::Element(el) = self {
            collect_elements(el, &mut out);
        }
        out
    }

    /// Serialize to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Markup::Element(el) => el.write_html(out),
            Markup::Text(text) => escape_into(text, false, out),
        }
    }
}

impl From<Element> for Markup {
    fn from(el: Element) -> Self {
        Markup::Element(el)
    }
}

impl From<&str> for Markup {
    fn from(text: &str) -> Self {
        Markup::Text(text.to_string())
    }
}

impl From<String> for Markup {
    fn from(text: String) -> Self {
        Markup::Text(text)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn collect_text(children: &[Markup], out: &mut String) {
    for child in children {
        match child {
            Markup::Text(text) => out.push_str(text),
            Markup::Element(el) => collect_text(&el.children, out),
        }
    }
}

fn collect_elements<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
    out.push(el);
    for child in el.child_elements() {
        collect_elements(child, out);
    }
}

fn escape_into(raw: &str, in_attr: bool, out: &mut String) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
