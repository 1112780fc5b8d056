use trellis_dom::{AttributeSource, ExternalAttribute};

use crate::sink::AttributeSink;

/// Attributes produced by code outside this crate.
pub trait ExternalAttributes: AttributeSink {
    /// Append external attribute arguments.
    ///
    /// See [`ExternalAttribute`] for how each argument is resolved;
    /// unsupported arguments are ignored.
    #[must_use]
    fn add_attributes<I>(mut self, attributes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ExternalAttribute>,
    {
        for attribute in attributes {
            self.node_mut().add_external_attribute(attribute);
        }
        self
    }

    /// Append every attribute listed by `source`.
    #[must_use]
    fn add_attribute_source<S: AttributeSource + ?Sized>(mut self, source: &S) -> Self {
        self.node_mut()
            .add_external_attribute(ExternalAttribute::from_source(source));
        self
    }
}
