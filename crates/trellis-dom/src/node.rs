//! The generic element node and its serialization.
//!
//! [§ 13.1 Writing HTML documents](https://html.spec.whatwg.org/multipage/syntax.html#writing)

use std::borrow::Cow;
use std::fmt;

use trellis_common::warning::warn_once;

use crate::attribute::ExternalAttribute;
use crate::content::Content;
use crate::render::Render;
use crate::text::RawText;

/// A resolved child of a node.
enum Child {
    Renderable(Box<dyn Render>),
    Text(RawText),
}

impl Child {
    fn render_into(&self, out: &mut String) {
        match self {
            Self::Renderable(value) => value.render_into(out),
            Self::Text(text) => text.render_into(out),
        }
    }
}

/// A tagged markup node: tag name, void flag, attributes, classes, styles
/// and children.
///
/// Attributes, classes, styles and children only grow, and they are rendered
/// in insertion order. Attribute entries are never deduplicated: setting the
/// same attribute twice renders it twice.
///
/// A node with an empty tag is a transparent wrapper that renders only its
/// children.
pub struct Node {
    /// "An element's local name". Empty for transparent wrappers.
    tag: Cow<'static, str>,

    /// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
    /// "Void elements only have a start tag; end tags must not be specified
    /// for void elements."
    is_void: bool,

    /// Pre-formatted `name` or `name="value"` entries.
    attributes: Vec<String>,
    classes: Vec<String>,
    /// Declarations, each terminated by `;`.
    styles: Vec<String>,
    children: Vec<Child>,
}

impl Node {
    /// Create a node for `tag`.
    #[must_use]
    pub fn new(tag: impl Into<Cow<'static, str>>, is_void: bool) -> Self {
        Self {
            tag: tag.into(),
            is_void,
            attributes: Vec::new(),
            classes: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a transparent wrapper that renders only its children.
    #[must_use]
    pub fn untagged() -> Self {
        Self::new("", false)
    }

    /// The tag name, empty for transparent wrappers.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns true if this node never renders children or a closing tag.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        self.is_void
    }

    /// The attribute entries added so far.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// The class tokens added so far.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The style declarations added so far.
    #[must_use]
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// The number of children added so far.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Add a `name="value"` attribute.
    ///
    /// The name is trimmed; an empty name is dropped. The value is written
    /// in its `Display` form without escaping.
    pub fn add_attribute(&mut self, name: &str, value: impl fmt::Display) {
        let Some(name) = attribute_name(name) else {
            return;
        };
        self.attributes.push(format!("{name}=\"{value}\""));
    }

    /// Add a bare `name` attribute (a boolean or presence attribute).
    ///
    /// The name is trimmed; an empty name is dropped.
    pub fn add_bare_attribute(&mut self, name: &str) {
        let Some(name) = attribute_name(name) else {
            return;
        };
        self.attributes.push(name.to_string());
    }

    /// Add class tokens. Each token is trimmed; empty tokens are dropped.
    pub fn add_classes<I>(&mut self, tokens: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref().trim();
            if !token.is_empty() {
                self.classes.push(token.to_string());
            }
        }
    }

    /// Add style declarations.
    ///
    /// Each declaration is trimmed and terminated with `;` if it is not
    /// already; empty declarations are dropped.
    pub fn add_styles<I>(&mut self, declarations: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for declaration in declarations {
            let declaration = declaration.as_ref().trim();
            if declaration.is_empty() {
                continue;
            }
            if declaration.ends_with(';') {
                self.styles.push(declaration.to_string());
            } else {
                self.styles.push(format!("{declaration};"));
            }
        }
    }

    /// Add one item of content.
    ///
    /// Renderable values are kept as they are, strings and other values
    /// become raw text, and [`Content::Nil`] is skipped.
    pub fn push_content(&mut self, item: impl Into<Content>) {
        match item.into() {
            Content::Renderable(value) => self.children.push(Child::Renderable(value)),
            Content::Text(text) | Content::Other(text) => {
                self.children.push(Child::Text(RawText::new(text)));
            }
            Content::Nil => {}
        }
    }

    /// Add several items of content, in order.
    pub fn add_content<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        for item in items {
            self.push_content(item);
        }
    }

    /// Add the entries of an external attribute argument.
    ///
    /// Every entry goes through [`Node::add_bare_attribute`], so entries are
    /// trimmed and empty ones dropped.
    pub fn add_external_attribute(&mut self, attribute: impl Into<ExternalAttribute>) {
        let attribute = attribute.into();
        if attribute == ExternalAttribute::Unsupported {
            warn_once("node", "ignored an unsupported external attribute value");
            return;
        }
        for entry in attribute.into_entries() {
            self.add_bare_attribute(&entry);
        }
    }

    /// Render `<tag ...>children</tag>` (or `<tag .../>` for void nodes),
    /// ignoring the transparent-wrapper case.
    pub(crate) fn render_element_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        self.render_attributes_into(out);

        if self.is_void {
            out.push_str("/>");
            return;
        }

        out.push('>');
        self.render_children_into(out);
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    /// Attributes first, then the combined `class`, then the combined `style`.
    fn render_attributes_into(&self, out: &mut String) {
        if !self.attributes.is_empty() {
            out.push(' ');
            out.push_str(&self.attributes.join(" "));
        }
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&self.classes.join(" "));
            out.push('"');
        }
        if !self.styles.is_empty() {
            out.push_str(" style=\"");
            out.push_str(&self.styles.join(" "));
            out.push('"');
        }
    }

    fn render_children_into(&self, out: &mut String) {
        for child in &self.children {
            child.render_into(out);
        }
    }
}

/// Trim an attribute name, reporting and rejecting empty ones.
fn attribute_name(name: &str) -> Option<&str> {
    let name = name.trim();
    if name.is_empty() {
        warn_once("node", "dropped an attribute with an empty name");
        return None;
    }
    Some(name)
}

impl Render for Node {
    fn render_into(&self, out: &mut String) {
        if self.tag.is_empty() {
            self.render_children_into(out);
        } else {
            self.render_element_into(out);
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::untagged()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("tag", &self.tag)
            .field("is_void", &self.is_void)
            .field("attributes", &self.attributes)
            .field("classes", &self.classes)
            .field("styles", &self.styles)
            .field("children", &self.children.len())
            .finish()
    }
}

crate::display_via_render!(Node);
