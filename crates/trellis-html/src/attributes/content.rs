use trellis_dom::Content;

use crate::sink::AttributeSink;

/// Children for non-void elements.
pub trait AddContent: AttributeSink {
    /// Append one item of content.
    ///
    /// Elements and text entities render themselves, plain strings and
    /// numbers are written verbatim, and `None`/`()` are skipped.
    #[must_use]
    fn add_content(mut self, item: impl Into<Content>) -> Self {
        self.node_mut().push_content(item);
        self
    }

    /// Append several items of content, in order.
    #[must_use]
    fn add_contents<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        self.node_mut().add_content(items);
        self
    }
}
