//! Content normalization.
//!
//! Every "add content" argument is converted into a [`Content`] at the call
//! boundary. The conversion decides how the value is treated:
//!
//! | Input | Variant | Rendered as |
//! |---|---|---|
//! | elements, text entities, [`Node`] | [`Content::Renderable`] | its own rendering |
//! | `&str`, `String` | [`Content::Text`] | verbatim (not escaped) |
//! | `()`, `None` | [`Content::Nil`] | nothing (skipped) |
//! | numbers, `bool`, `char` | [`Content::Other`] | its `Display` text, verbatim |

use std::borrow::Cow;
use std::fmt;

use crate::node::Node;
use crate::render::Render;
use crate::text::{EscapedText, RawText};

/// A single item of content, resolved from whatever the caller passed in.
pub enum Content {
    /// A value that renders itself (an element, a node, a text entity).
    Renderable(Box<dyn Render>),
    /// A plain string. Trusted: it is emitted without escaping.
    Text(String),
    /// Nothing. Skipped when added to a node.
    Nil,
    /// Any other value, already converted to its textual form.
    Other(String),
}

impl Content {
    /// Wrap a caller-defined [`Render`] implementation.
    #[must_use]
    pub fn renderable(value: impl Render + 'static) -> Self {
        Self::Renderable(Box::new(value))
    }

    /// Stringify any [`fmt::Display`] value as raw text.
    #[must_use]
    pub fn other(value: &impl fmt::Display) -> Self {
        Self::Other(value.to_string())
    }

    /// Returns true if this content will be skipped.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renderable(value) => f.debug_tuple("Renderable").field(&value.render()).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Nil => f.write_str("Nil"),
            Self::Other(text) => f.debug_tuple("Other").field(text).finish(),
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Content {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for Content {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<()> for Content {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl From<Box<dyn Render>> for Content {
    fn from(value: Box<dyn Render>) -> Self {
        Self::Renderable(value)
    }
}

impl From<EscapedText> for Content {
    fn from(value: EscapedText) -> Self {
        Self::renderable(value)
    }
}

impl From<RawText> for Content {
    fn from(value: RawText) -> Self {
        Self::renderable(value)
    }
}

impl From<Node> for Content {
    fn from(value: Node) -> Self {
        Self::renderable(value)
    }
}

macro_rules! content_from_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Content {
                fn from(value: $ty) -> Self {
                    Self::Other(value.to_string())
                }
            }
        )+
    };
}

content_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Build a `Vec<Content>` from heterogeneous items.
///
/// ```
/// use trellis_dom::{Content, content};
///
/// let items: Vec<Content> = content![None::<&str>, true, 123_i32, "x"];
/// assert!(items[0].is_nil());
/// ```
#[macro_export]
macro_rules! content {
    ($($item:expr),* $(,)?) => {
        ::std::vec![$($crate::Content::from($item)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_are_text() {
        assert!(matches!(Content::from("a<b>"), Content::Text(s) if s == "a<b>"));
        assert!(matches!(Content::from(String::from("x")), Content::Text(s) if s == "x"));
    }

    #[test]
    fn test_none_and_unit_are_nil() {
        assert!(Content::from(None::<i32>).is_nil());
        assert!(Content::from(()).is_nil());
        assert!(matches!(Content::from(Some(5_i32)), Content::Other(s) if s == "5"));
    }

    #[test]
    fn test_scalars_are_stringified() {
        assert!(matches!(Content::from(true), Content::Other(s) if s == "true"));
        assert!(matches!(Content::from(-12_i64), Content::Other(s) if s == "-12"));
        assert!(matches!(Content::from(456.78), Content::Other(s) if s == "456.78"));
    }

    #[test]
    fn test_entities_are_renderable() {
        let content = Content::from(EscapedText::new("<"));
        assert_eq!(format!("{content:?}"), "Renderable(\"&lt;\")");
    }
}
