//! Escaped and raw text entities.
//!
//! [§ 13.1.3 Text](https://html.spec.whatwg.org/multipage/syntax.html#text-2)
//!
//! Text reaches the output in one of two ways: [`EscapedText`] substitutes
//! the five reserved markup characters with character references, while
//! [`RawText`] is emitted verbatim. Plain strings added as content are
//! treated as raw text, so markup authored by hand passes through unchanged.

use crate::entities::{any_entity_has_prefix, lookup_entity};
use crate::render::Render;

/// Text whose rendering escapes `&`, `<`, `>`, `"` and `'`.
///
/// `unescape_html(&EscapedText::new(s).render()) == s` holds for every `s`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EscapedText {
    content: String,
}

impl EscapedText {
    /// Wrap `content` for escaped output.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The unescaped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl Render for EscapedText {
    fn render_into(&self, out: &mut String) {
        push_escaped(out, &self.content);
    }
}

/// Text rendered exactly as given, for pre-built markup fragments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawText {
    content: String,
}

impl RawText {
    /// Wrap `content` for verbatim output.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The text as it will be rendered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl Render for RawText {
    fn render_into(&self, out: &mut String) {
        out.push_str(&self.content);
    }
}

crate::display_via_render!(EscapedText, RawText);

/// Create an [`EscapedText`] entity.
#[must_use]
pub fn escape_string(content: impl Into<String>) -> EscapedText {
    EscapedText::new(content)
}

/// Create a [`RawText`] entity.
#[must_use]
pub fn raw_string(content: impl Into<String>) -> RawText {
    RawText::new(content)
}

/// Build an [`EscapedText`] from a format string.
///
/// ```
/// use trellis_dom::{Render, escaped};
///
/// assert_eq!(escaped!("{} < {}", 2, 3).render(), "2 &lt; 3");
/// ```
#[macro_export]
macro_rules! escaped {
    ($($arg:tt)*) => {
        $crate::EscapedText::new(::std::format!($($arg)*))
    };
}

/// Build a [`RawText`] from a format string.
///
/// ```
/// use trellis_dom::{Render, raw};
///
/// assert_eq!(raw!("<b>{}</b>", "bold").render(), "<b>bold</b>");
/// ```
#[macro_export]
macro_rules! raw {
    ($($arg:tt)*) => {
        $crate::RawText::new(::std::format!($($arg)*))
    };
}

/// Append `text` to `out`, replacing the reserved markup characters.
///
/// `"` and `'` become the numeric references `&#34;` and `&#39;`, which are
/// valid both in text and inside either kind of quoted attribute value.
pub fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Escape the reserved markup characters in `text`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Decode character references in `text`.
///
/// Handles the named references in [`crate::entities`] and decimal or
/// hexadecimal numeric references. Anything that is not a recognized
/// reference is kept as written.
///
/// The relationship with [`escape_html`] is one-way: unescaping the escaped
/// form always recovers the input, but different inputs can unescape to the
/// same text (`"&amp;"` and `"&#38;"` both become `"&"`).
#[must_use]
pub fn unescape_html(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];
        match decode_reference(tail, &mut out) {
            Some(consumed) => rest = &tail[consumed..],
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode the reference at the start of `tail` (just past the `&`).
///
/// Returns the number of bytes consumed, or `None` when `tail` does not
/// start with a reference.
fn decode_reference(tail: &str, out: &mut String) -> Option<usize> {
    if let Some(numeric) = tail.strip_prefix('#') {
        let (c, consumed) = decode_numeric(numeric)?;
        out.push(c);
        return Some(consumed + 1);
    }

    let (value, consumed) = decode_named(tail)?;
    out.push_str(value);
    Some(consumed)
}

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// "If the number is 0x00 ... or greater than 0x10FFFF ... set the character
/// reference code to 0xFFFD." Surrogates get the same treatment since they
/// are not valid `char`s.
fn decode_numeric(s: &str) -> Option<(char, usize)> {
    let (start, radix) = match s.as_bytes().first() {
        Some(b'x' | b'X') => (1, 16),
        _ => (0, 10),
    };
    let digits = s[start..]
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if digits == 0 {
        return None;
    }

    let end = start + digits;
    let c = u32::from_str_radix(&s[start..end], radix)
        .ok()
        .filter(|&code| code != 0)
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    let consumed = if s[end..].starts_with(';') { end + 1 } else { end };
    Some((c, consumed))
}

/// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
///
/// "Consume the maximum number of characters possible, where the consumed
/// characters are one of the identifiers in the named character references
/// table."
fn decode_named(s: &str) -> Option<(&'static str, usize)> {
    let mut name_len = 0;
    for (i, c) in s.char_indices() {
        if !c.is_ascii_alphanumeric() || !any_entity_has_prefix(&s[..=i]) {
            break;
        }
        name_len = i + 1;
    }
    if name_len == 0 {
        return None;
    }

    if s[name_len..].starts_with(';')
        && let Some(value) = lookup_entity(&s[..=name_len])
    {
        return Some((value, name_len + 1));
    }

    // Legacy names match without the semicolon, longest first.
    (1..=name_len)
        .rev()
        .find_map(|len| lookup_entity(&s[..len]).map(|value| (value, len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&#34;x&#34;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_other_text_alone() {
        assert_eq!(escape_html("héllo wörld ✓"), "héllo wörld ✓");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_unescape_named_and_numeric() {
        assert_eq!(unescape_html("a &lt;b&gt; &amp; &quot;c&quot;"), "a <b> & \"c\"");
        assert_eq!(unescape_html("&#34;&#39;&#x41;&#X42;"), "\"'AB");
        assert_eq!(unescape_html("&copy; 2024"), "\u{00A9} 2024");
    }

    #[test]
    fn test_unescape_legacy_without_semicolon() {
        assert_eq!(unescape_html("fish &amp chips"), "fish & chips");
        assert_eq!(unescape_html("&ampfoo"), "&foo");
    }

    #[test]
    fn test_unescape_keeps_unknown_references() {
        assert_eq!(unescape_html("&bogus; & &#; &"), "&bogus; & &#; &");
    }

    #[test]
    fn test_unescape_invalid_code_points() {
        assert_eq!(unescape_html("&#0;"), "\u{FFFD}");
        assert_eq!(unescape_html("&#xD800;"), "\u{FFFD}");
        assert_eq!(unescape_html("&#99999999999;"), "\u{FFFD}");
    }

    #[test]
    fn test_numeric_without_semicolon() {
        assert_eq!(unescape_html("&#65B"), "AB");
    }
}
