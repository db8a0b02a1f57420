// File: crates/chart-core/src/svg.rs
// Summary: Minimal retained element tree (SVG/HTML) with in-place mutation and serialization.

use std::fmt::{self, Display, Write as _};

use crate::text::escape_html;

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    /// Escaped on output.
    Text(String),
    /// Trusted markup written verbatim (tooltip bodies).
    Raw(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), children: Vec::new() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, name: &str, value: impl Display) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: impl Display) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Attribute parsed as a number, when present and numeric.
    pub fn attr_f64(&self, name: &str) -> Option<f64> {
        self.get_attr(name).and_then(|v| v.trim().parse().ok())
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn child(mut self, el: Element) -> Self {
        self.push(el);
        self
    }

    pub fn push(&mut self, el: Element) {
        self.children.push(Node::Element(el));
    }

    pub fn text(mut self, s: impl Into<String>) -> Self {
        self.children.push(Node::Text(s.into()));
        self
    }

    /// Replace all children with trusted markup.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.children = vec![Node::Raw(html.into())];
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Depth-first search of descendants (and self) by `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|n| match n {
            Node::Element(e) => e.find_by_id_mut(id),
            _ => None,
        })
    }

    /// All descendants (not self) with `tag`, in document order.
    pub fn select_all(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(tag, &mut out);
        out
    }

    fn collect<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        for c in self.child_elements() {
            if c.tag == tag {
                out.push(c);
            }
            c.collect(tag, out);
        }
    }

    /// All descendants whose `class` attribute contains `class`.
    pub fn select_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_class(class, &mut out);
        out
    }

    fn collect_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        for c in self.child_elements() {
            if c.get_attr("class").is_some_and(|v| v.split_whitespace().any(|x| x == class)) {
                out.push(c);
            }
            c.collect_class(class, out);
        }
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for n in &self.children {
            match n {
                Node::Element(e) => e.collect_text(out),
                Node::Text(t) | Node::Raw(t) => out.push_str(t),
            }
        }
    }

    fn write_into(&self, out: &mut String) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for (k, v) in &self.attrs {
            write!(out, " {}=\"{}\"", k, escape_html(v))?;
        }
        if self.children.is_empty() && self.tag != "div" {
            out.push_str("/>");
            return Ok(());
        }
        out.push('>');
        for n in &self.children {
            match n {
                Node::Element(e) => e.write_into(out)?,
                Node::Text(t) => out.push_str(&escape_html(t)),
                Node::Raw(t) => out.push_str(t),
            }
        }
        write!(out, "</{}>", self.tag)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_into(&mut out)?;
        f.write_str(&out)
    }
}

/// `translate(x,y)` transform attribute value.
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", crate::text::num(x), crate::text::num(y))
}
