//! [§ 8.1.8.1 Event handlers](https://html.spec.whatwg.org/multipage/webappapis.html#event-handler-attributes)
//!
//! "Event handler content attributes, when specified, must contain valid
//! JavaScript code". Their names are the event type prefixed with `on`.

use trellis_common::warning::warn_once;

use crate::sink::AttributeSink;

/// Inline event handler attributes.
pub trait EventHandlers: AttributeSink {
    /// Add an `on<event>="script"` attribute.
    ///
    /// The event name is trimmed and lower-cased; `click` and `onClick` both
    /// produce `onclick`. The script is written as given.
    #[must_use]
    fn on(self, event: impl AsRef<str>, script: impl AsRef<str>) -> Self {
        let event = event.as_ref().trim().to_ascii_lowercase();
        if event.is_empty() {
            warn_once("attributes", "dropped an event handler with an empty event name");
            return self;
        }
        let name = if event.starts_with("on") {
            event
        } else {
            format!("on{event}")
        };
        self.with_attribute(&name, script.as_ref())
    }
}
