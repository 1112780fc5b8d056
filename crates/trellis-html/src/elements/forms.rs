//! [§ 4.10 Forms](https://html.spec.whatwg.org/multipage/forms.html)

elements! {
    /// A button.
    button => ButtonElement("button", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        DisabledAttr, FormAttr, FormActionAttr, FormEncTypeAttr, FormMethodAttr,
        FormNoValidateAttr, FormTargetAttr, NameAttr, PopoverTargetAttr,
        PopoverTargetActionAttr, TypeAttr, ValueAttr;

    /// Predefined options for other controls.
    datalist => DatalistElement("datalist", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A group of form controls.
    fieldset => FieldsetElement("fieldset", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        DisabledAttr, FormAttr, NameAttr;

    /// A form for submitting information.
    form => FormElement("form", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        AcceptCharsetAttr, AutoCompleteAttr, NameAttr, RelAttr, ActionAttr, EncTypeAttr,
        MethodAttr, NoValidateAttr, TargetAttr;

    /// A typed data field.
    input => InputElement("input", void):
        GlobalAttributes, ExternalAttributes, EventHandlers,
        AcceptAttr, AltAttr, AutoCompleteAttr, CaptureAttr, CheckedAttr, DirNameAttr,
        DisabledAttr, FormAttr, FormActionAttr, FormEncTypeAttr, FormMethodAttr,
        FormNoValidateAttr, FormTargetAttr, ListAttr, MaxAttr, MaxLengthAttr, MinAttr,
        MinLengthAttr, NameAttr, PatternAttr, PlaceholderAttr, PopoverTargetAttr,
        PopoverTargetActionAttr, ReadOnlyAttr, RequiredAttr, SizeAttr, SrcAttr, StepAttr,
        TypeAttr, ValueAttr;

    /// A caption for a form control.
    label => LabelElement("label", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, ForAttr;

    /// A caption for a fieldset.
    legend => LegendElement("legend", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent;

    /// A scalar measurement within a known range.
    meter => MeterElement("meter", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        MinAttr, MaxAttr, LowAttr, HighAttr, OptimumAttr, FormAttr;

    /// A group of options in a select.
    optgroup => OptgroupElement("optgroup", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, DisabledAttr, LabelAttr;

    /// An option in a select or datalist.
    option => OptionElement("option", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        DisabledAttr, LabelAttr, SelectedAttr, ValueAttr;

    /// The result of a calculation or user action.
    output => OutputElement("output", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, ForAttr, FormAttr, NameAttr;

    /// The completion progress of a task.
    progress => ProgressElement("progress", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent, MaxAttr, ValueAttr;

    /// A control for selecting among options.
    select => SelectElement("select", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        AutoCompleteAttr, DisabledAttr, FormAttr, MultipleAttr, NameAttr, RequiredAttr, SizeAttr;

    /// A multi-line plain-text edit control.
    textarea => TextareaElement("textarea", normal):
        GlobalAttributes, ExternalAttributes, EventHandlers, AddContent,
        AutoCompleteAttr, ColsAttr, DirNameAttr, DisabledAttr, FormAttr, MaxLengthAttr,
        MinLengthAttr, NameAttr, PlaceholderAttr, ReadOnlyAttr, RequiredAttr, RowsAttr, WrapAttr;
}
