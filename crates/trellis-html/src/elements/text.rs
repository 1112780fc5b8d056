//! [§ 4.5 Text-level semantics](https://html.spec.whatwg.org/multipage/text-level-semantics.html)

elements! {
    /// A hyperlink.
    a => AElement("a", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        DownloadAttr, HrefAttr, HrefLangAttr, PingAttr, RelAttr, TargetAttr, TypeAttr;

    /// An abbreviation or acronym.
    abbr => AbbrElement("abbr", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Text to draw attention to, without extra importance.
    b => BElement("b", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Text isolated from its surroundings for bidirectional formatting.
    bdi => BdiElement("bdi", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Text with an explicit direction override.
    bdo => BdoElement("bdo", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A line break.
    br => BrElement("br", void): GlobalAttributes, ExternalAttributes, EventHandlers;

    /// The title of a creative work.
    cite => CiteElement("cite", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A fragment of computer code.
    code => CodeElement("code", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Content with a machine-readable value.
    data => DataElement("data", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, ValueAttr;

    /// The defining instance of a term.
    dfn => DfnElement("dfn", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Stress emphasis.
    em => EmElement("em", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Text in an alternate voice or mood.
    i => IElement("i", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// User input.
    kbd => KbdElement("kbd", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Highlighted text.
    mark => MarkElement("mark", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// An inline quotation.
    q => QElement("q", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, CiteAttr;

    /// Fallback parentheses for ruby annotations.
    rp => RpElement("rp", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// The text of a ruby annotation.
    rt => RtElement("rt", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Content that is no longer accurate or relevant.
    s => SElement("s", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Sample output from a program.
    samp => SampElement("samp", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Side comments such as small print.
    small => SmallElement("small", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A generic inline container.
    span => SpanElement("span", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Strong importance.
    strong => StrongElement("strong", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A subscript.
    sub => SubElement("sub", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A superscript.
    sup => SupElement("sup", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A date or time, with a machine-readable form in `datetime`.
    time => TimeElement("time", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, DateTimeAttr;

    /// Text with an unarticulated non-textual annotation.
    u => UElement("u", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A variable.
    var => VarElement("var", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A line break opportunity.
    wbr => WbrElement("wbr", void): GlobalAttributes, ExternalAttributes, EventHandlers;
}
