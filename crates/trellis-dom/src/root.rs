//! The document root wrapper.
//!
//! [§ 13.1 Writing HTML documents](https://html.spec.whatwg.org/multipage/syntax.html#writing)
//!
//! "Documents must consist of the following parts, in the given order:
//! 1. Optionally, a single U+FEFF BYTE ORDER MARK (BOM) character.
//! 2. Any number of comments and ASCII whitespace.
//! 3. A DOCTYPE.
//! 4. Any number of comments and ASCII whitespace.
//! 5. The document element, in the form of an html element."

use std::borrow::Cow;

use crate::node::Node;
use crate::render::Render;

/// [§ 13.1.1 The DOCTYPE](https://html.spec.whatwg.org/multipage/syntax.html#the-doctype)
///
/// The preamble written before the document element.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// The document element: a non-void node rendered after [`DOCTYPE`].
///
/// `DocumentRoot` has no conversion into [`crate::Content`]: a root cannot be
/// nested inside another node, so the preamble appears once per document.
#[derive(Debug)]
pub struct DocumentRoot {
    node: Node,
}

impl DocumentRoot {
    /// Create the document element for `tag` (normally `html`).
    #[must_use]
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            node: Node::new(tag, false),
        }
    }

    /// The wrapped node.
    #[must_use]
    pub const fn node(&self) -> &Node {
        &self.node
    }

    /// The wrapped node, for adding attributes and content.
    pub fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }
}

impl Render for DocumentRoot {
    fn render_into(&self, out: &mut String) {
        out.push_str(DOCTYPE);
        self.node.render_element_into(out);
    }
}

crate::display_via_render!(DocumentRoot);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_prefixes_doctype() {
        let mut root = DocumentRoot::new("html");
        root.node_mut().add_attribute("lang", "en");
        root.node_mut().push_content("x");
        assert_eq!(root.render(), "<!DOCTYPE html><html lang=\"en\">x</html>");
    }
}
