//! Node tree and serialization core for the Trellis HTML builder.
//!
//! This crate owns everything that decides what the output text looks like:
//! - **Node** ([`Node`]) - tag name, void flag, ordered attributes, classes,
//!   styles and children, plus the serialization algorithm
//! - **Text entities** ([`EscapedText`], [`RawText`]) - leaf content with and
//!   without [§ 13.5 named character reference](https://html.spec.whatwg.org/multipage/named-characters.html)
//!   escaping
//! - **Content** ([`Content`]) - the union every "add content" argument is
//!   normalized into before it reaches a node
//! - **External attributes** ([`ExternalAttribute`]) - attribute bundles
//!   supplied by unrelated code
//! - **Root wrapper** ([`DocumentRoot`]) - the document element, prefixed
//!   with the `<!DOCTYPE html>` preamble
//!
//! # Design
//!
//! Nothing in this crate returns an error. Empty names, blank class tokens
//! and unsupported values are dropped (and recorded through
//! [`trellis_common::warning`]) so that building a tree never fails.
//! Rendering never mutates the tree and can be repeated with identical output.

/// External attribute bundles.
pub mod attribute;
/// Content normalization.
pub mod content;
/// Named character reference table.
pub mod entities;
/// The generic element node.
pub mod node;
/// The renderable-text contract.
pub mod render;
/// The document root wrapper.
pub mod root;
/// Escaped and raw text entities.
pub mod text;

pub use attribute::{AttributeSource, ExternalAttribute};
pub use content::Content;
pub use node::Node;
pub use render::Render;
pub use root::{DOCTYPE, DocumentRoot};
pub use text::{EscapedText, RawText, escape_html, escape_string, raw_string, unescape_html};
