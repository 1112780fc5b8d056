//! Element constructors.
//!
//! [§ 4 The elements of HTML](https://html.spec.whatwg.org/multipage/#toc-semantics)
//!
//! Every tag has a zero-argument constructor returning its own element type.
//! The mixins listed for a tag in the tables below decide which setters the
//! type exposes; void elements never implement [`AddContent`](crate::attributes::AddContent).
//!
//! ```
//! use trellis_html::prelude::*;
//!
//! let link = a().href("/docs").class(["nav"]).add_content("Docs");
//! assert_eq!(link.render(), r#"<a href="/docs" class="nav">Docs</a>"#);
//! ```

/// Implements the element plumbing for a struct with a `node: Node` field.
macro_rules! element_impls {
    ($name:ident) => {
        impl $crate::sink::AttributeSink for $name {
            fn node(&self) -> &::trellis_dom::Node {
                &self.node
            }

            fn node_mut(&mut self) -> &mut ::trellis_dom::Node {
                &mut self.node
            }
        }

        impl ::trellis_dom::Render for $name {
            fn render_into(&self, out: &mut String) {
                ::trellis_dom::Render::render_into(&self.node, out);
            }
        }

        ::trellis_dom::display_via_render!($name);

        impl From<$name> for ::trellis_dom::Content {
            fn from(value: $name) -> Self {
                Self::renderable(value)
            }
        }
    };
}

macro_rules! is_void {
    (void) => {
        true
    };
    (normal) => {
        false
    };
}

/// Declares element types and their constructors.
///
/// `ctor => Type("tag", void | normal): Mixin, ...;`
macro_rules! elements {
    ($(
        $(#[$meta:meta])*
        $ctor:ident => $name:ident($tag:literal, $kind:ident) $(: $($mixin:ident),+)?;
    )*) => {
        $(
            #[doc = concat!("The `<", $tag, ">` element, built by [`", stringify!($ctor), "`].")]
            #[derive(Debug)]
            pub struct $name {
                node: ::trellis_dom::Node,
            }

            element_impls!($name);

            $($(impl $crate::attributes::$mixin for $name {})+)?

            $(#[$meta])*
            #[must_use]
            pub fn $ctor() -> $name {
                $name {
                    node: ::trellis_dom::Node::new($tag, is_void!($kind)),
                }
            }
        )*
    };
}

mod document;
mod embedded;
mod forms;
mod interactive;
mod metadata;
mod sections;
mod tables;
mod text;

pub use document::*;
pub use embedded::*;
pub use forms::*;
pub use interactive::*;
pub use metadata::*;
pub use sections::*;
pub use tables::*;
pub use text::*;
