//! Attribute mixins.
//!
//! Each trait here is a bundle of provided methods over
//! [`AttributeSink`](crate::sink::AttributeSink). Element types opt into a
//! mixin with an empty `impl`, which is how the element table in
//! [`crate::elements`] decides which setters a tag exposes.

mod content;
mod events;
mod external;
mod global;
mod specific;

pub use content::AddContent;
pub use events::EventHandlers;
pub use external::ExternalAttributes;
pub use global::GlobalAttributes;
pub use specific::*;
