//! Attribute mixins: global, element-specific, events and external bundles.

use trellis_dom::AttributeSource;
use trellis_html::prelude::*;

// ========== Global attributes ==========

#[test]
fn test_global_attributes_render_in_call_order() {
    let el = div().id("main").lang("en").title("T").tab_index(-1).hidden();
    assert_eq!(
        el.render(),
        r#"<div id="main" lang="en" title="T" tabindex="-1" hidden></div>"#
    );
}

#[test]
fn test_aria_and_data_prefixes() {
    let el = button().aria("label", "Close").data("id", "7");
    assert_eq!(el.render(), r#"<button aria-label="Close" data-id="7"></button>"#);
}

#[test]
fn test_class_and_style_follow_attributes() {
    let el = div()
        .style(["color:red"])
        .class(["a"])
        .id("x")
        .class(["b", "  "])
        .style(["margin: 0;", ""]);
    assert_eq!(
        el.render(),
        r#"<div id="x" class="a b" style="color:red; margin: 0;"></div>"#
    );
}

#[test]
fn test_duplicate_attributes_are_kept() {
    assert_eq!(div().id("a").id("b").render(), r#"<div id="a" id="b"></div>"#);
}

#[test]
fn test_attribute_values_are_not_escaped() {
    assert_eq!(
        a().href("/q?a=1&b=2").render(),
        r#"<a href="/q?a=1&b=2"></a>"#
    );
}

#[test]
fn test_boolean_valued_attributes() {
    assert_eq!(div().draggable(true).render(), r#"<div draggable="true"></div>"#);
    assert_eq!(
        video().disable_remote_playback(false).render(),
        r#"<video disableremoteplayback="false"></video>"#
    );
}

#[test]
fn test_optional_flags() {
    assert_eq!(div().autofocus().render(), "<div autofocus></div>");
    assert_eq!(
        div().spell_check_value(false).inert_value(true).render(),
        r#"<div spellcheck="false" inert="true"></div>"#
    );
    assert_eq!(div().inert().spell_check().render(), "<div inert spellcheck></div>");
}

// ========== Enumerated attributes ==========

#[test]
fn test_enumerated_values_are_normalized() {
    assert_eq!(
        div().content_editable_value(" Plaintext-Only ").render(),
        r#"<div contenteditable="plaintext-only"></div>"#
    );
    assert_eq!(
        input().enter_key_hint_value("SEND").render(),
        r#"<input enterkeyhint="send"/>"#
    );
}

#[test]
fn test_unrecognized_enumerated_values_fall_back_to_bare() {
    assert_eq!(
        div().content_editable_value("sometimes").render(),
        "<div contenteditable></div>"
    );
    assert_eq!(input().enter_key_hint_value("").render(), "<input enterkeyhint/>");
}

#[test]
fn test_enumerated_bare_setters() {
    assert_eq!(div().content_editable().render(), "<div contenteditable></div>");
    assert_eq!(input().enter_key_hint().render(), "<input enterkeyhint/>");
}

// ========== Keyword-like text attributes ==========

#[test]
fn test_translate_crossorigin_and_preload_pass_values_through() {
    assert_eq!(p().translate("no").render(), r#"<p translate="no"></p>"#);
    assert_eq!(p().translate("maybe").render(), r#"<p translate="maybe"></p>"#);
    assert_eq!(p().translate("").render(), r#"<p translate=""></p>"#);
    assert_eq!(
        img().cross_origin("everyone").render(),
        r#"<img crossorigin="everyone"/>"#
    );
    assert_eq!(
        script().cross_origin("use-credentials").render(),
        r#"<script crossorigin="use-credentials"></script>"#
    );
    assert_eq!(
        video().preload(" Eager ").render(),
        r#"<video preload=" Eager "></video>"#
    );
}

// ========== Events ==========

#[test]
fn test_event_names_are_prefixed_and_lowercased() {
    let el = button()
        .on("click", "go()")
        .on("onSubmit", "send()")
        .on(" Input ", "sync()");
    assert_eq!(
        el.render(),
        r#"<button onclick="go()" onsubmit="send()" oninput="sync()"></button>"#
    );
}

#[test]
fn test_empty_event_name_is_dropped() {
    assert_eq!(button().on("  ", "x()").render(), "<button></button>");
}

// ========== External attributes ==========

struct Csrf;

impl AttributeSource for Csrf {
    fn attributes(&self) -> Vec<String> {
        vec![r#"data-csrf="t0k3n""#.to_string()]
    }
}

#[test]
fn test_external_attribute_kinds() {
    let el = form().add_attributes(attributes![
        ExternalAttribute::from_source(&Csrf),
        ExternalAttribute::rendered(&42),
        "novalidate",
        None::<&str>,
        (),
    ]);
    assert_eq!(
        el.render(),
        r#"<form data-csrf="t0k3n" 42 novalidate></form>"#
    );
}

#[test]
fn test_external_attributes_keep_call_order() {
    let el = div()
        .id("x")
        .add_attributes(["hx-boost"])
        .add_attribute_source(&Csrf)
        .class(["c"]);
    assert_eq!(
        el.render(),
        r#"<div id="x" hx-boost data-csrf="t0k3n" class="c"></div>"#
    );
}

// ========== Sink ==========

#[test]
fn test_sink_helpers_for_unlisted_attributes() {
    let el = div()
        .with_attribute("hx-get", "/items")
        .with_bare_attribute("hx-boost")
        .with_optional_flag("aria-busy", Some(true));
    assert_eq!(
        el.render(),
        r#"<div hx-get="/items" hx-boost aria-busy="true"></div>"#
    );
}
