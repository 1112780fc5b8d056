//! Named character reference lookup table.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html)
//!
//! Backs [`crate::unescape_html`]. The full table defines 2,231 entities; we
//! carry the five reserved markup characters plus the ones that show up in
//! hand-written content.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Maps entity names (without the leading '&') to their replacement strings.
///
/// NOTE: `amp`, `lt`, `gt` and `quot` also appear without the trailing
/// semicolon. Those are the legacy forms browsers still accept.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Reserved markup characters
        ("amp;", "&"),
        ("amp", "&"), // Legacy (no semicolon)
        ("lt;", "<"),
        ("lt", "<"), // Legacy
        ("gt;", ">"),
        ("gt", ">"), // Legacy
        ("quot;", "\""),
        ("quot", "\""), // Legacy
        ("apos;", "'"),
        // Whitespace
        ("nbsp;", "\u{00A0}"),
        ("ensp;", "\u{2002}"),
        ("emsp;", "\u{2003}"),
        ("thinsp;", "\u{2009}"),
        // Punctuation and symbols
        ("copy;", "\u{00A9}"),
        ("reg;", "\u{00AE}"),
        ("trade;", "\u{2122}"),
        ("mdash;", "\u{2014}"),
        ("ndash;", "\u{2013}"),
        ("hellip;", "\u{2026}"),
        ("bull;", "\u{2022}"),
        ("middot;", "\u{00B7}"),
        ("sect;", "\u{00A7}"),
        ("para;", "\u{00B6}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("laquo;", "\u{00AB}"),
        ("raquo;", "\u{00BB}"),
        // Currency
        ("cent;", "\u{00A2}"),
        ("pound;", "\u{00A3}"),
        ("euro;", "\u{20AC}"),
        ("yen;", "\u{00A5}"),
        // Math
        ("times;", "\u{00D7}"),
        ("divide;", "\u{00F7}"),
        ("plusmn;", "\u{00B1}"),
        ("ne;", "\u{2260}"),
        ("le;", "\u{2264}"),
        ("ge;", "\u{2265}"),
        ("deg;", "\u{00B0}"),
        ("frac12;", "\u{00BD}"),
        ("frac14;", "\u{00BC}"),
        ("frac34;", "\u{00BE}"),
        // Arrows
        ("larr;", "\u{2190}"),
        ("rarr;", "\u{2192}"),
        ("uarr;", "\u{2191}"),
        ("darr;", "\u{2193}"),
        // Accented letters
        ("aacute;", "\u{00E1}"),
        ("eacute;", "\u{00E9}"),
        ("iacute;", "\u{00ED}"),
        ("oacute;", "\u{00F3}"),
        ("uacute;", "\u{00FA}"),
        ("Aacute;", "\u{00C1}"),
        ("Eacute;", "\u{00C9}"),
        ("Iacute;", "\u{00CD}"),
        ("Oacute;", "\u{00D3}"),
        ("Uacute;", "\u{00DA}"),
        ("ntilde;", "\u{00F1}"),
        ("Ntilde;", "\u{00D1}"),
        ("uuml;", "\u{00FC}"),
        ("ccedil;", "\u{00E7}"),
        ("iexcl;", "\u{00A1}"),
        ("iquest;", "\u{00BF}"),
    ])
});

/// Look up a named character reference.
///
/// Returns the replacement string if found.
/// The `name` should NOT include the leading '&'.
///
/// # Example
/// ```ignore
/// lookup_entity("amp;")  // Some("&")
/// lookup_entity("amp")   // Some("&") - legacy form
/// lookup_entity("xyz;")  // None
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// Check if any entity name starts with the given prefix.
#[must_use]
pub fn any_entity_has_prefix(prefix: &str) -> bool {
    NAMED_ENTITIES.keys().any(|name| name.starts_with(prefix))
}
