//! [§ 4.2 Document metadata](https://html.spec.whatwg.org/multipage/semantics.html#document-metadata)

elements! {
    /// The document base URL and default browsing context for links.
    base => BaseElement("base", void): HrefAttr, TargetAttr;

    /// A collection of metadata for the document.
    head => HeadElement("head", normal): AddContent;

    /// A link from the document to an external resource.
    link => LinkElement("link", void):
        AsAttr, CrossOriginAttr, DisabledAttr, HrefAttr, HrefLangAttr, IntegrityAttr, MediaAttr,
        RelAttr, SizesAttr, TypeAttr;

    /// Metadata that cannot be expressed with the other metadata elements.
    meta => MetaElement("meta", void): CharsetAttr, MetaContentAttr, HttpEquivAttr, NameAttr;

    /// Embedded style information.
    style => StyleElement("style", normal): MediaAttr, TypeAttr, AddContent;

    /// The document's title.
    title => TitleElement("title", normal): AddContent;
}
