//! [§ 4.3 Sections](https://html.spec.whatwg.org/multipage/sections.html) and
//! [§ 4.4 Grouping content](https://html.spec.whatwg.org/multipage/grouping-content.html)

elements! {
    /// The contents of the document.
    body => BodyElement("body", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Contact information for the nearest article or body.
    address => AddressElement("address", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A self-contained composition.
    article => ArticleElement("article", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Content tangentially related to its surroundings.
    aside => AsideElement("aside", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A footer for the nearest sectioning content.
    footer => FooterElement("footer", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Introductory content or navigational aids.
    header => HeaderElement("header", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A top-level heading.
    h1 => H1Element("h1", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A second-level heading.
    h2 => H2Element("h2", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A third-level heading.
    h3 => H3Element("h3", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A fourth-level heading.
    h4 => H4Element("h4", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A fifth-level heading.
    h5 => H5Element("h5", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A sixth-level heading.
    h6 => H6Element("h6", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A heading grouped with secondary content such as subheadings.
    hgroup => HgroupElement("hgroup", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// The dominant contents of the document.
    main => MainElement("main", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A section of navigation links.
    nav => NavElement("nav", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A generic section of a document.
    section => SectionElement("section", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Search or filtering controls.
    search => SearchElement("search", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A section quoted from another source.
    blockquote => BlockquoteElement("blockquote", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, CiteAttr;

    /// The description or value part of a term-description group.
    dd => DdElement("dd", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A generic flow container.
    div => DivElement("div", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A description list.
    dl => DlElement("dl", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// The term part of a term-description group.
    dt => DtElement("dt", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// The caption of a figure.
    figcaption => FigcaptionElement("figcaption", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// Self-contained content, optionally with a caption.
    figure => FigureElement("figure", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A thematic break between paragraphs.
    hr => HrElement("hr", void): GlobalAttributes, ExternalAttributes, EventHandlers;

    /// A list item.
    li => LiElement("li", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A toolbar of commands, as an unordered list.
    menu => MenuElement("menu", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// An ordered list.
    ol => OlElement("ol", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, ReversedAttr, StartAttr;

    /// A paragraph.
    p => PElement("p", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A block of preformatted text.
    pre => PreElement("pre", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// An unordered list.
    ul => UlElement("ul", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;
}
