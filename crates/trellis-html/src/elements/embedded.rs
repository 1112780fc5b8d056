//! Embedded content, scripting and edits.
//!
//! [§ 4.8 Embedded content](https://html.spec.whatwg.org/multipage/embedded-content.html),
//! [§ 4.12 Scripting](https://html.spec.whatwg.org/multipage/scripting.html) and
//! [§ 4.7 Edits](https://html.spec.whatwg.org/multipage/edits.html).
//!
//! `<object>` is void here: it takes its resource from `data` and has no
//! fallback children.

elements! {
    /// A hyperlink region inside an image map.
    area => AreaElement("area", void):
        GlobalAttributes, ExternalAttributes, EventHandlers,
        AltAttr, CoordsAttr, DownloadAttr, HrefAttr, PingAttr, RelAttr, ShapeAttr, TargetAttr;

    /// An image.
    img => ImgElement("img", void):
        GlobalAttributes, ExternalAttributes, EventHandlers,
        AltAttr, CrossOriginAttr, DecodingAttr, IsMapAttr, LoadingAttr, SrcAttr, SrcSetAttr;

    /// An image map.
    map => MapElement("map", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, NameAttr;

    /// A timed text track for media elements.
    track => TrackElement("track", void):
        GlobalAttributes, ExternalAttributes, EventHandlers,
        DefaultAttr, KindAttr, LabelAttr, SrcAttr, SrcLangAttr;

    /// A video player.
    video => VideoElement("video", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        AutoPlayAttr, ControlsAttr, ControlsListAttr, CrossOriginAttr,
        DisablePictureInPictureAttr, DisableRemotePlaybackAttr, LoopAttr, MutedAttr,
        PlaysInlineAttr, PosterAttr, PreloadAttr, SrcAttr;

    /// An integration point for external content.
    embed => EmbedElement("embed", void):
        GlobalAttributes, ExternalAttributes, EventHandlers, TypeAttr, SrcAttr;

    /// A nested browsing context.
    iframe => IframeElement("iframe", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        AllowAttr, LoadingAttr, NameAttr, SandboxAttr, SrcAttr;

    /// An external resource, such as a PDF.
    object => ObjectElement("object", void):
        GlobalAttributes, ExternalAttributes, EventHandlers,
        DataUrlAttr, FormAttr, NameAttr, TypeAttr;

    /// Alternative image sources for art direction or formats.
    picture => PictureElement("picture", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A media or image source.
    source => SourceElement("source", void):
        GlobalAttributes, ExternalAttributes, EventHandlers,
        TypeAttr, SrcAttr, SrcSetAttr, SizesAttr, MediaAttr;

    /// An inline SVG container.
    svg => SvgElement("svg", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A scriptable bitmap canvas.
    canvas => CanvasElement("canvas", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Content shown when scripting is disabled.
    noscript => NoscriptElement("noscript", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// An inline or external script.
    script => ScriptElement("script", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        AsyncAttr, CrossOriginAttr, DeferAttr, IntegrityAttr, SrcAttr, TypeAttr;

    /// A removal from the document.
    del => DelElement("del", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, CiteAttr, DateTimeAttr;

    /// An addition to the document.
    ins => InsElement("ins", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, CiteAttr, DateTimeAttr;
}
