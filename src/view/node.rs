//! Minimal HTML element tree.
//!
//! All text and attribute values are escaped at render time, so server
//! supplied strings can never inject markup.

use std::fmt::{self, Write};

/// Elements rendered without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// SVG leaf elements, rendered self-closed when childless.
const SVG_LEAF_TAGS: &[&str] = &["polyline", "circle", "line", "rect"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

/// Start building an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node.
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

/// Group nodes without a wrapping element.
pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(nodes.into_iter().collect())
}

impl Element {
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Set an attribute, replacing any earlier value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Append to the class list.
    pub fn class(self, class: &str) -> Self {
        let joined = match self.get_attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.attr("class", joined)
    }

    pub fn class_if(self, cond: bool, class: &str) -> Self {
        if cond {
            self.class(class)
        } else {
            self
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child only when present.
    pub fn opt_child(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    pub fn children<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(text(s))
    }

    fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(out, " {name}=\"")?;
            write_escaped(out, value)?;
            out.write_char('"')?;
        }

        if VOID_TAGS.contains(&self.tag) {
            return out.write_char('>');
        }
        if self.children.is_empty() && SVG_LEAF_TAGS.contains(&self.tag) {
            return out.write_str("/>");
        }

        out.write_char('>')?;
        for child in &self.children {
            child.write_to(out)?;
        }
        write!(out, "</{}>", self.tag)
    }
}

impl Node {
    fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Node::Element(e) => e.write_to(out),
            Node::Text(t) => write_escaped(out, t),
            Node::Fragment(nodes) => nodes.iter().try_for_each(|n| n.write_to(out)),
        }
    }

    /// Concatenated text content, unescaped.
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        self.collect_text(&mut buf);
        buf
    }

    fn collect_text(&self, buf: &mut String) {
        match self {
            Node::Text(t) => buf.push_str(t),
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(buf)),
            Node::Fragment(nodes) => nodes.iter().for_each(|c| c.collect_text(buf)),
        }
    }
}

fn write_escaped(out: &mut impl Write, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&#39;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}
