//! [§ 4.11 Interactive elements](https://html.spec.whatwg.org/multipage/interactive-elements.html)
//! and [§ 4.12 web component](https://html.spec.whatwg.org/multipage/scripting.html#the-template-element)
//! building blocks.

elements! {
    /// A disclosure widget.
    details => DetailsElement("details", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, OpenAttr, NameAttr;

    /// A dialog box or other interactive component.
    dialog => DialogElement("dialog", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, OpenAttr;

    /// The summary or legend of a `<details>`.
    summary => SummaryElement("summary", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A placeholder inside a web component's shadow tree.
    slot => SlotElement("slot", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, NameAttr;

    /// A fragment that is not rendered but can be cloned by scripts.
    template => TemplateElement("template", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;
}
