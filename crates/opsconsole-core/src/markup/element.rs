//! Owned markup nodes and the builder for assembling them

use std::fmt::Write as _;

/// A single markup node: tag, optional id, classes, and child nodes
///
/// Elements are plain owned data. A detached subtree lives as long as its
/// owner holds it and is dropped like any other value; nothing here attaches
/// it to a visible document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with the given tag name
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a `div` element
    pub fn div() -> Self {
        Self::new("div")
    }

    /// Set the id attribute
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a class name
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Append a child node
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Tag name of this element
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The id attribute, if one was set
    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class names in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Child nodes in insertion order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable access to the child nodes
    ///
    /// Children can be edited or replaced in place; the slice itself cannot
    /// grow or shrink, so containment stays a structural invariant.
    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Find a node by id in this subtree, self included
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        for child in &self.children {
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }
        None
    }

    /// Find a node by id mutably
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_by_id_mut(id) {
                return Some(found);
            }
        }
        None
    }

    /// Render this subtree as markup text
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape_attr(id));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attr(&self.classes.join(" ")));
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape a string for use inside a double-quoted attribute value
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
