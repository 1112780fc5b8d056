//! Element-specific attributes, one mixin trait per attribute.
//!
//! The traits are generated from tables grouped by value kind:
//!
//! - text: `name="value"`, written verbatim
//! - integer: `name="42"`
//! - flag: a bare boolean attribute, `name`
//! - boolean: `name="true"` or `name="false"`
//! - optional flag: bare via `x()`, explicit via `x_value(bool)`
//!
//! Setter names follow the attribute name in snake case; the ones that
//! collide with Rust keywords use raw identifiers (`r#type`, `r#for`, ...).

use crate::sink::AttributeSink;

macro_rules! text_attributes {
    ($($(#[$meta:meta])* $name:ident::$method:ident($attr:literal);)*) => {
        $(
            #[doc = concat!("The `", $attr, "` attribute.")]
            $(#[$meta])*
            pub trait $name: AttributeSink {
                #[doc = concat!("Set `", $attr, "`.")]
                #[must_use]
                fn $method(self, value: impl AsRef<str>) -> Self {
                    self.with_attribute($attr, value.as_ref())
                }
            }
        )*
    };
}

macro_rules! integer_attributes {
    ($($(#[$meta:meta])* $name:ident::$method:ident($attr:literal);)*) => {
        $(
            #[doc = concat!("The `", $attr, "` attribute.")]
            $(#[$meta])*
            pub trait $name: AttributeSink {
                #[doc = concat!("Set `", $attr, "` to an integer.")]
                #[must_use]
                fn $method(self, value: i64) -> Self {
                    self.with_attribute($attr, value)
                }
            }
        )*
    };
}

macro_rules! flag_attributes {
    ($($(#[$meta:meta])* $name:ident::$method:ident($attr:literal);)*) => {
        $(
            #[doc = concat!("The `", $attr, "` boolean attribute.")]
            $(#[$meta])*
            pub trait $name: AttributeSink {
                #[doc = concat!("Add a bare `", $attr, "`.")]
                #[must_use]
                fn $method(self) -> Self {
                    self.with_bare_attribute($attr)
                }
            }
        )*
    };
}

macro_rules! boolean_attributes {
    ($($(#[$meta:meta])* $name:ident::$method:ident($attr:literal);)*) => {
        $(
            #[doc = concat!("The `", $attr, "` attribute.")]
            $(#[$meta])*
            pub trait $name: AttributeSink {
                #[doc = concat!("Set `", $attr, "=\"true\"` or `", $attr, "=\"false\"`.")]
                #[must_use]
                fn $method(self, value: bool) -> Self {
                    self.with_attribute($attr, value)
                }
            }
        )*
    };
}

macro_rules! optional_flag_attributes {
    ($($(#[$meta:meta])* $name:ident::$method:ident / $value_method:ident($attr:literal);)*) => {
        $(
            #[doc = concat!("The `", $attr, "` attribute.")]
            $(#[$meta])*
            pub trait $name: AttributeSink {
                #[doc = concat!("Add a bare `", $attr, "`.")]
                #[must_use]
                fn $method(self) -> Self {
                    self.with_optional_flag($attr, None)
                }

                #[doc = concat!("Set `", $attr, "=\"true\"` or `", $attr, "=\"false\"`.")]
                #[must_use]
                fn $value_method(self, value: bool) -> Self {
                    self.with_optional_flag($attr, Some(value))
                }
            }
        )*
    };
}

text_attributes! {
    /// A comma-separated list of file types for file inputs.
    AcceptAttr::accept("accept");
    AcceptCharsetAttr::accept_charset("accept-charset");
    ActionAttr::action("action");
    /// A permissions policy for an `<iframe>`.
    AllowAttr::allow("allow");
    AltAttr::alt("alt");
    /// The kind of resource a `<link rel="preload">` fetches.
    AsAttr::r#as("as");
    /// The abbreviated form of a header cell.
    AbbrAttr::abbr("abbr");
    AutoCompleteAttr::auto_complete("autocomplete");
    CaptureAttr::capture("capture");
    CharsetAttr::charset("charset");
    CiteAttr::cite("cite");
    /// The value of a `<meta>` element, paired with `name` or `http-equiv`.
    MetaContentAttr::content("content");
    ControlsListAttr::controls_list("controlslist");
    CoordsAttr::coords("coords");
    /// The CORS mode for fetching the resource: `anonymous` or `use-credentials`.
    CrossOriginAttr::cross_origin("crossorigin");
    /// The address of an `<object>` resource.
    DataUrlAttr::data_url("data");
    DateTimeAttr::date_time("datetime");
    DecodingAttr::decoding("decoding");
    DirNameAttr::dir_name("dirname");
    /// Treat a hyperlink as a download, optionally naming the saved file.
    DownloadAttr::download("download");
    EncTypeAttr::enc_type("enctype");
    /// The id of the form control a `<label>` or `<output>` refers to.
    ForAttr::r#for("for");
    FormAttr::form("form");
    FormActionAttr::form_action("formaction");
    FormEncTypeAttr::form_enc_type("formenctype");
    FormMethodAttr::form_method("formmethod");
    FormTargetAttr::form_target("formtarget");
    HeadersAttr::headers("headers");
    HighAttr::high("high");
    HrefAttr::href("href");
    HrefLangAttr::href_lang("hreflang");
    HttpEquivAttr::http_equiv("http-equiv");
    /// A subresource integrity digest.
    IntegrityAttr::integrity("integrity");
    KindAttr::kind("kind");
    LabelAttr::label("label");
    LoadingAttr::loading("loading");
    ListAttr::list("list");
    MaxAttr::max("max");
    MediaAttr::media("media");
    MethodAttr::method("method");
    MinAttr::min("min");
    NameAttr::name("name");
    PatternAttr::pattern("pattern");
    PingAttr::ping("ping");
    PlaceholderAttr::placeholder("placeholder");
    PopoverTargetAttr::popover_target("popovertarget");
    PopoverTargetActionAttr::popover_target_action("popovertargetaction");
    PosterAttr::poster("poster");
    /// A hint for how much of a media resource to buffer: `none`, `metadata` or `auto`.
    PreloadAttr::preload("preload");
    RelAttr::rel("rel");
    SandboxAttr::sandbox("sandbox");
    ScopeAttr::scope("scope");
    ShapeAttr::shape("shape");
    SizesAttr::sizes("sizes");
    SrcAttr::src("src");
    SrcLangAttr::src_lang("srclang");
    SrcSetAttr::src_set("srcset");
    TargetAttr::target("target");
    /// A MIME type, or the control type of an `<input>` or `<button>`.
    TypeAttr::r#type("type");
    ValueAttr::value("value");
    WrapAttr::wrap("wrap");
}

integer_attributes! {
    ColsAttr::cols("cols");
    ColSpanAttr::col_span("colspan");
    LowAttr::low("low");
    MaxLengthAttr::max_length("maxlength");
    MinLengthAttr::min_length("minlength");
    OptimumAttr::optimum("optimum");
    RowsAttr::rows("rows");
    RowSpanAttr::row_span("rowspan");
    SizeAttr::size("size");
    SpanAttr::span("span");
    /// The ordinal value of the first item of an ordered list.
    StartAttr::start("start");
    StepAttr::step("step");
}

flag_attributes! {
    AsyncAttr::r#async("async");
    AutoPlayAttr::auto_play("autoplay");
    CheckedAttr::checked("checked");
    ControlsAttr::controls("controls");
    /// Enable this track unless the user's preferences say otherwise.
    DefaultAttr::default("default");
    DeferAttr::defer("defer");
    DisabledAttr::disabled("disabled");
    DisablePictureInPictureAttr::disable_picture_in_picture("disablepictureinpicture");
    FormNoValidateAttr::form_no_validate("formnovalidate");
    IsMapAttr::is_map("ismap");
    LoopAttr::r#loop("loop");
    MultipleAttr::multiple("multiple");
    MutedAttr::muted("muted");
    NoValidateAttr::no_validate("novalidate");
    ReadOnlyAttr::read_only("readonly");
    RequiredAttr::required("required");
    ReversedAttr::reversed("reversed");
    SelectedAttr::selected("selected");
}

boolean_attributes! {
    DisableRemotePlaybackAttr::disable_remote_playback("disableremoteplayback");
    PlaysInlineAttr::plays_inline("playsinline");
}

optional_flag_attributes! {
    /// Whether a `<details>` or `<dialog>` is showing its contents.
    OpenAttr::open / open_value("open");
}
