//! [§ 4.9 Tabular data](https://html.spec.whatwg.org/multipage/tables.html)

elements! {
    /// The title of a table.
    caption => CaptionElement("caption", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// One or more columns in a column group.
    col => ColElement("col", void): GlobalAttributes, ExternalAttributes, EventHandlers, SpanAttr;

    /// A group of columns.
    colgroup => ColgroupElement("colgroup", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, SpanAttr;

    /// Tabular data.
    table => TableElement("table", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A block of data rows.
    tbody => TbodyElement("tbody", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A data cell.
    td => TdElement("td", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        ColSpanAttr, HeadersAttr, RowSpanAttr;

    /// The rows summarizing the columns of a table.
    tfoot => TfootElement("tfoot", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A header cell.
    th => ThElement("th", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        AbbrAttr, ColSpanAttr, HeadersAttr, RowSpanAttr, ScopeAttr;

    /// The header rows of a table.
    thead => TheadElement("thead", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A row of cells.
    tr => TrElement("tr", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;
}
