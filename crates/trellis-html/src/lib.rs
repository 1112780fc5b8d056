//! Typed HTML element constructors.
//!
//! Every element of the HTML living standard that Trellis supports has a
//! constructor (`div()`, `input()`, ...) returning a dedicated type. Setters
//! come from mixin traits in [`attributes`], so an element only exposes the
//! attributes that apply to it, and only non-void elements accept content.
//!
//! ```
//! use trellis_html::prelude::*;
//!
//! let page = html()
//!     .lang("en")
//!     .add_content(head().add_content(title().add_content("Hello")))
//!     .add_content(
//!         body().add_content(
//!             div()
//!                 .id("x")
//!                 .class(["a", "b"])
//!                 .add_content("hi"),
//!         ),
//!     );
//!
//! assert_eq!(
//!     page.render(),
//!     concat!(
//!         "<!DOCTYPE html><html lang=\"en\">",
//!         "<head><title>Hello</title></head>",
//!         "<body><div id=\"x\" class=\"a b\">hi</div></body></html>",
//!     )
//! );
//! ```
//!
//! Constructors take no arguments; content is added by chaining
//! [`add_content`](attributes::AddContent::add_content) for one item or
//! [`add_contents`](attributes::AddContent::add_contents) for a list, so
//! attributes and children read in the order they render:
//!
//! ```
//! use trellis_html::prelude::*;
//!
//! assert_eq!(p().add_content("a<b>").render(), "<p>a<b></p>");
//! assert_eq!(
//!     p().add_contents(content![escape_string("a<b>"), 1_i32, None::<&str>]).render(),
//!     "<p>a&lt;b&gt;1</p>"
//! );
//! ```
//!
//! Attribute values and plain string content are written without escaping;
//! wrap untrusted text with [`escape_string`](trellis_dom::escape_string).

pub mod attributes;
pub mod elements;
pub mod error;
pub mod prelude;
pub mod sink;
pub mod values;

pub use error::AttributeError;
pub use sink::AttributeSink;
