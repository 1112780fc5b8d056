//! [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
//!
//! "The following attributes are common to and may be specified on all HTML
//! elements".

use crate::sink::AttributeSink;
use crate::values::{ContentEditable, EnterKeyHint};

/// Attributes accepted by every element.
pub trait GlobalAttributes: AttributeSink {
    /// Set `accesskey`, a keyboard shortcut for the element.
    #[must_use]
    fn access_key(self, value: impl AsRef<str>) -> Self {
        self.with_attribute("accesskey", value.as_ref())
    }

    /// Set `aria-<name>`.
    #[must_use]
    fn aria(self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.with_attribute(&format!("aria-{}", name.as_ref()), value.as_ref())
    }

    /// Set `autocapitalize`.
    #[must_use]
    fn auto_capitalize(self, value: impl AsRef<str>) -> Self {
        self.with_attribute("autocapitalize", value.as_ref())
    }

    /// Add a bare `autofocus`.
    #[must_use]
    fn autofocus(self) -> Self {
        self.with_optional_flag("autofocus", None)
    }

    /// Set `autofocus="true"` or `autofocus="false"`.
    #[must_use]
    fn autofocus_value(self, value: bool) -> Self {
        self.with_optional_flag("autofocus", Some(value))
    }

    /// Add class tokens, merged into a single `class` attribute.
    #[must_use]
    fn class<I>(self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.with_classes(tokens)
    }

    /// Add a bare `contenteditable`.
    #[must_use]
    fn content_editable(self) -> Self {
        self.with_bare_attribute("contenteditable")
    }

    /// Set `contenteditable` to one of its keywords, or fall back to the
    /// bare attribute.
    #[must_use]
    fn content_editable_value(self, value: impl AsRef<str>) -> Self {
        self.with_enumerated::<ContentEditable>(value.as_ref())
    }

    /// Set `data-<name>`.
    #[must_use]
    fn data(self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.with_attribute(&format!("data-{}", name.as_ref()), value.as_ref())
    }

    /// Set `dir`.
    #[must_use]
    fn dir(self, value: impl AsRef<str>) -> Self {
        self.with_attribute("dir", value.as_ref())
    }

    /// Set `draggable="true"` or `draggable="false"`.
    #[must_use]
    fn draggable(self, value: bool) -> Self {
        self.with_attribute("draggable", value)
    }

    /// Add a bare `enterkeyhint`.
    #[must_use]
    fn enter_key_hint(self) -> Self {
        self.with_bare_attribute("enterkeyhint")
    }

    /// Set `enterkeyhint` to one of its keywords, or fall back to the bare
    /// attribute.
    #[must_use]
    fn enter_key_hint_value(self, value: impl AsRef<str>) -> Self {
        self.with_enumerated::<EnterKeyHint>(value.as_ref())
    }

    /// Add a bare `hidden`.
    #[must_use]
    fn hidden(self) -> Self {
        self.with_bare_attribute("hidden")
    }

    /// Set `id`.
    #[must_use]
    fn id(self, value: impl AsRef<str>) -> Self {
        self.with_attribute("id", value.as_ref())
    }

    /// Add a bare `inert`.
    #[must_use]
    fn inert(self) -> Self {
        self.with_optional_flag("inert", None)
    }

    /// Set `inert="true"` or `inert="false"`.
    #[must_use]
    fn inert_value(self, value: bool) -> Self {
        self.with_optional_flag("inert", Some(value))
    }

    /// Set `inputmode`.
    #[must_use]
    fn input_mode(self, value: impl AsRef<str>) -> Self {
        self.with_attribute("inputmode", value.as_ref())
    }

    /// Set `itemprop`.
    #[must_use]
    fn item_prop(self, value: impl AsRef<str>) -> Self {
        self.with_attribute("itemprop", value.as_ref())
    }

    /// Set `lang`.
    #[must_use]
    fn lang(self, value: impl AsRef<str>) -> Self {
        self.with_attribute("lang", value.as_ref())
    }

    /// Set `role`.
    #[must_use]
    fn role(self, value: impl AsRef<str>) -> Self {
        self.with_attribute("role", value.as_ref())
    }

    /// Add a bare `spellcheck`.
    #[must_use]
    fn spell_check(self) -> Self {
        self.with_optional_flag("spellcheck", None)
    }

    /// Set `spellcheck="true"` or `spellcheck="false"`.
    #[must_use]
    fn spell_check_value(self, value: bool) -> Self {
        self.with_optional_flag("spellcheck", Some(value))
    }

    /// Add style declarations, merged into a single `style` attribute.
    #[must_use]
    fn style<I>(self, declarations: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.with_styles(declarations)
    }

    /// Set `tabindex`.
    #[must_use]
    fn tab_index(self, value: i64) -> Self {
        self.with_attribute("tabindex", value)
    }

    /// Set `title`, advisory information shown as a tooltip.
    #[must_use]
    fn title(self, value: impl AsRef<str>) -> Self {
        self.with_attribute("title", value.as_ref())
    }

    /// Set `translate`, normally `yes` or `no`. The value is written as given.
    #[must_use]
    fn translate(self, value: impl AsRef<str>) -> Self {
        self.with_attribute("translate", value.as_ref())
    }
}
