//! The capability every attribute mixin is built on.

use std::fmt;

use trellis_common::warning::warn_once_with_detail;
use trellis_dom::Node;

use crate::values::EnumeratedValue;

/// Access to the [`Node`] behind a concrete element type.
///
/// Element types implement the two accessors; every mixin trait
/// ([`crate::attributes`]) is a set of provided methods on top of this one,
/// so adding a capability to an element is a single empty `impl`.
///
/// All helpers take and return `self` by value so calls can be chained.
pub trait AttributeSink: Sized {
    /// The node being built.
    fn node(&self) -> &Node;

    /// The node being built, for mutation.
    fn node_mut(&mut self) -> &mut Node;

    /// Add a `name="value"` attribute.
    #[must_use]
    fn with_attribute(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.node_mut().add_attribute(name, value);
        self
    }

    /// Add a bare `name` attribute.
    #[must_use]
    fn with_bare_attribute(mut self, name: &str) -> Self {
        self.node_mut().add_bare_attribute(name);
        self
    }

    /// Add `name` bare when `value` is `None`, or `name="true"`/`name="false"`.
    #[must_use]
    fn with_optional_flag(self, name: &str, value: Option<bool>) -> Self {
        match value {
            None => self.with_bare_attribute(name),
            Some(value) => self.with_attribute(name, value),
        }
    }

    /// Add the value of an enumerated attribute.
    ///
    /// Unrecognized values fall back to the bare attribute. The warning
    /// names the attribute; the rejected value only appears in its printed
    /// detail.
    #[must_use]
    fn with_enumerated<V: EnumeratedValue>(self, value: &str) -> Self {
        match V::parse_token(value) {
            Ok(keyword) => self.with_attribute(V::ATTRIBUTE, keyword.as_ref()),
            Err(err) => {
                warn_once_with_detail("attributes", V::UNRECOGNIZED, &err);
                self.with_bare_attribute(V::ATTRIBUTE)
            }
        }
    }

    /// Add class tokens.
    #[must_use]
    fn with_classes<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.node_mut().add_classes(tokens);
        self
    }

    /// Add style declarations.
    #[must_use]
    fn with_styles<I>(mut self, declarations: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.node_mut().add_styles(declarations);
        self
    }
}
