//! Attribute value errors.
//!
//! Setters never surface these: an unrecognized enumerated value degrades to
//! the bare attribute and the error text is recorded as a warning. They are
//! returned directly by [`crate::values::EnumeratedValue::parse_token`].

use thiserror::Error;

/// A value that cannot be used for an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// The value is not one of the attribute's keywords.
    #[error("unrecognized value `{value}` for the `{attribute}` attribute")]
    UnrecognizedToken {
        /// The attribute being set.
        attribute: &'static str,
        /// The value as supplied by the caller.
        value: String,
    },
}
