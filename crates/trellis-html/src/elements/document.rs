//! The document element and transparent wrappers.

use trellis_dom::DocumentRoot;

use crate::attributes::{AddContent, GlobalAttributes};

/// A tagless wrapper that renders only its children.
#[derive(Debug, Default)]
pub struct UntaggedElement {
    node: trellis_dom::Node,
}

element_impls!(UntaggedElement);

impl AddContent for UntaggedElement {}

/// Group content without adding any markup of its own.
#[must_use]
pub fn container() -> UntaggedElement {
    UntaggedElement {
        node: trellis_dom::Node::untagged(),
    }
}

/// A tagless wrapper for a reusable piece of markup.
///
/// Renders exactly like [`container`]; the separate name documents intent
/// at the call site.
#[must_use]
pub fn component() -> UntaggedElement {
    container()
}

/// [§ 4.1.1 The html element](https://html.spec.whatwg.org/multipage/semantics.html#the-html-element)
///
/// The document element. Rendering writes the `<!DOCTYPE html>` preamble
/// first. It cannot be added as content to another element.
#[derive(Debug)]
pub struct HtmlElement {
    root: DocumentRoot,
}

impl crate::sink::AttributeSink for HtmlElement {
    fn node(&self) -> &trellis_dom::Node {
        self.root.node()
    }

    fn node_mut(&mut self) -> &mut trellis_dom::Node {
        self.root.node_mut()
    }
}

impl trellis_dom::Render for HtmlElement {
    fn render_into(&self, out: &mut String) {
        trellis_dom::Render::render_into(&self.root, out);
    }
}

trellis_dom::display_via_render!(HtmlElement);

impl GlobalAttributes for HtmlElement {}
impl AddContent for HtmlElement {}

/// Start a document.
#[must_use]
pub fn html() -> HtmlElement {
    HtmlElement {
        root: DocumentRoot::new("html"),
    }
}
