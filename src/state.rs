/// The control state of the scanner. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum LexState {
    /// Scanning a text run up to the next `<`. The initial state.
    #[default]
    Text,
    /// Expecting the literal `<` that begins a tag occurrence.
    TagOpen,
    /// Just past a `<`: a tag name, a markup declaration or a processing
    /// instruction follows.
    TagNameOrComment,
    /// Inside a tag, expecting an attribute name or the tag terminator.
    AttrName,
    /// Inside a tag with a pending attribute name, expecting its value, the
    /// next attribute name, or the tag terminator.
    AttrValueOrNextAttr,
}
