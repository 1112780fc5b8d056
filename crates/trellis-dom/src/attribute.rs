//! External attribute bundles.
//!
//! Lets attributes produced by unrelated code (a CSRF helper, an htmx
//! integration, a design-system crate) be attached to a node without this
//! crate knowing about that code. Inputs are resolved into an
//! [`ExternalAttribute`] at the call boundary, in priority order:
//!
//! 1. a value implementing [`AttributeSource`] contributes each of its
//!    attribute strings as a separate entry
//! 2. a value that only renders to a string contributes that one string
//! 3. a plain string is added as given
//! 4. anything else is ignored

use std::fmt;

/// A value that can list pre-formatted attribute strings
/// (`name` or `name="value"`).
pub trait AttributeSource {
    /// The attribute strings, in the order they should be added.
    fn attributes(&self) -> Vec<String>;
}

/// One external attribute argument, resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalAttribute {
    /// Each string is added as its own attribute entry.
    List(Vec<String>),
    /// A rendered bundle, added as one entry (it may hold several attributes).
    Rendered(String),
    /// A plain string, added as one entry.
    Plain(String),
    /// Ignored.
    Unsupported,
}

impl ExternalAttribute {
    /// Resolve an [`AttributeSource`].
    #[must_use]
    pub fn from_source<S: AttributeSource + ?Sized>(source: &S) -> Self {
        Self::List(source.attributes())
    }

    /// Resolve any [`fmt::Display`] value as a single rendered bundle.
    #[must_use]
    pub fn rendered(value: &impl fmt::Display) -> Self {
        Self::Rendered(value.to_string())
    }

    /// The attribute entries this argument contributes, in order.
    #[must_use]
    pub fn into_entries(self) -> Vec<String> {
        match self {
            Self::List(entries) => entries,
            Self::Rendered(entry) | Self::Plain(entry) => vec![entry],
            Self::Unsupported => Vec::new(),
        }
    }
}

impl From<&str> for ExternalAttribute {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for ExternalAttribute {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<Vec<String>> for ExternalAttribute {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<()> for ExternalAttribute {
    fn from((): ()) -> Self {
        Self::Unsupported
    }
}

impl<T: Into<ExternalAttribute>> From<Option<T>> for ExternalAttribute {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unsupported, Into::into)
    }
}

/// Build a `Vec<ExternalAttribute>` from heterogeneous items.
#[macro_export]
macro_rules! attributes {
    ($($item:expr),* $(,)?) => {
        ::std::vec![$($crate::ExternalAttribute::from($item)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Htmx;

    impl AttributeSource for Htmx {
        fn attributes(&self) -> Vec<String> {
            vec![r#"hx-get="/items""#.to_string(), "hx-boost".to_string()]
        }
    }

    #[test]
    fn test_source_contributes_each_entry() {
        assert_eq!(
            ExternalAttribute::from_source(&Htmx).into_entries(),
            vec![r#"hx-get="/items""#.to_string(), "hx-boost".to_string()]
        );
    }

    #[test]
    fn test_rendered_is_single_entry() {
        struct Bundle;
        impl fmt::Display for Bundle {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(r#"a="1" b="2""#)
            }
        }

        assert_eq!(
            ExternalAttribute::rendered(&Bundle).into_entries(),
            vec![r#"a="1" b="2""#.to_string()]
        );
    }

    #[test]
    fn test_none_is_unsupported() {
        assert_eq!(ExternalAttribute::from(None::<&str>), ExternalAttribute::Unsupported);
        assert!(ExternalAttribute::from(()).into_entries().is_empty());
    }
}
