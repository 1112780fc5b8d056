//! Keywords of the enumerated attributes.
//!
//! [§ 2.3.3 Keywords and enumerated attributes](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#keywords-and-enumerated-attributes)
//!
//! "Some attributes, called enumerated attributes, take on a finite set of
//! states." Each enum below lists the keywords for one such attribute. The
//! setters accept free text, normalize it (trim, ASCII lower-case) and fall
//! back to the bare attribute when the text is not a keyword.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::AttributeError;

/// An attribute whose value must be one of a fixed set of keywords.
pub trait EnumeratedValue: FromStr + AsRef<str> {
    /// The attribute name.
    const ATTRIBUTE: &'static str;

    /// The warning recorded when a value is not a keyword. It names the
    /// attribute but never the rejected value.
    const UNRECOGNIZED: &'static str;

    /// Parse a keyword after trimming and lower-casing it.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::UnrecognizedToken`] if the normalized text
    /// is not one of the keywords.
    fn parse_token(raw: &str) -> Result<Self, AttributeError> {
        raw.trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| AttributeError::UnrecognizedToken {
                attribute: Self::ATTRIBUTE,
                value: raw.to_string(),
            })
    }
}

/// [§ 6.8.1 Making document regions editable](https://html.spec.whatwg.org/multipage/interaction.html#contenteditable)
///
/// The bare attribute is equivalent to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ContentEditable {
    /// The element is editable.
    True,
    /// The element is not editable.
    False,
    /// Only the raw text is editable; rich text formatting is disabled.
    PlaintextOnly,
}

impl EnumeratedValue for ContentEditable {
    const ATTRIBUTE: &'static str = "contenteditable";
    const UNRECOGNIZED: &'static str = "unrecognized value for the `contenteditable` attribute";
}

/// [§ 6.8.7 Input modalities: the enterkeyhint attribute](https://html.spec.whatwg.org/multipage/interaction.html#input-modalities:-the-enterkeyhint-attribute)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum EnterKeyHint {
    /// Insert a new line.
    Enter,
    /// Nothing more to input; close the input method editor.
    Done,
    /// Take the user to the target of the text they typed.
    Go,
    /// Take the user to the next field.
    Next,
    /// Take the user to the previous field.
    Previous,
    /// Take the user to the results of searching for the text.
    Search,
    /// Deliver the text to its target.
    Send,
}

impl EnumeratedValue for EnterKeyHint {
    const ATTRIBUTE: &'static str = "enterkeyhint";
    const UNRECOGNIZED: &'static str = "unrecognized value for the `enterkeyhint` attribute";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!(
            ContentEditable::parse_token("  Plaintext-Only "),
            Ok(ContentEditable::PlaintextOnly)
        );
        assert_eq!(EnterKeyHint::parse_token("GO"), Ok(EnterKeyHint::Go));
    }

    #[test]
    fn test_parse_rejects_unknown_keywords() {
        assert_eq!(
            EnterKeyHint::parse_token("jump"),
            Err(AttributeError::UnrecognizedToken {
                attribute: "enterkeyhint",
                value: "jump".to_string(),
            })
        );
    }

    #[test]
    fn test_keywords_render_kebab_case() {
        assert_eq!(ContentEditable::PlaintextOnly.as_ref(), "plaintext-only");
        assert_eq!(EnterKeyHint::Previous.to_string(), "previous");
    }

    #[test]
    fn test_error_message() {
        let err = ContentEditable::parse_token("maybe").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized value `maybe` for the `contenteditable` attribute"
        );
    }
}
