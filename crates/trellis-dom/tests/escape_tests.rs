//! Property and regression tests for escaping and unescaping.

use quickcheck_macros::quickcheck;
use trellis_dom::{EscapedText, Render, escape_html, escaped, unescape_html};

#[quickcheck]
fn prop_unescape_recovers_escaped_input(input: String) -> bool {
    unescape_html(&escape_html(&input)) == input
}

#[quickcheck]
fn prop_escaped_output_has_no_reserved_characters(input: String) -> bool {
    let escaped = escape_html(&input);
    !escaped.contains(['<', '>', '"', '\''])
}

#[quickcheck]
fn prop_escaped_entity_matches_escape_html(input: String) -> bool {
    EscapedText::new(input.clone()).render() == escape_html(&input)
}

#[test]
fn test_round_trip_of_reference_lookalikes() {
    for input in ["&amp;", "&lt;", "&#38;", "&#x26;", "&amp", "&&;;", "a & b"] {
        assert_eq!(unescape_html(&escape_html(input)), input);
    }
}

#[test]
fn test_converse_does_not_hold() {
    // Different texts unescape to the same string...
    assert_eq!(unescape_html("&amp;"), "&");
    assert_eq!(unescape_html("&#38;"), "&");
    assert_eq!(unescape_html("&amp"), "&");

    // ...so escaping the unescaped text cannot give each of them back.
    assert_ne!(escape_html(&unescape_html("&#38;")), "&#38;");
    assert_ne!(escape_html(&unescape_html("a<b")), "a<b");
}

#[test]
fn test_escaped_macro_formats_then_escapes() {
    let name = "<script>";
    assert_eq!(escaped!("hello {name}!").render(), "hello &lt;script&gt;!");
}
