//! Everything needed to build documents: element constructors, mixin
//! traits and the core rendering types.

pub use trellis_dom::{
    Content, EscapedText, ExternalAttribute, RawText, Render, attributes, content,
    escape_string, escaped, raw, raw_string,
};

pub use crate::attributes::*;
pub use crate::elements::*;
pub use crate::sink::AttributeSink;
