//! The renderable-text contract shared by nodes, text entities and elements.

/// Anything that can produce its final HTML text.
///
/// Nodes, text entities, the document root and every element type implement
/// this trait. A node accepts any `Render` value as a child, which is what
/// makes arbitrary nesting possible.
///
/// Rendering is read-only: calling [`Render::render`] twice on the same value
/// yields identical output.
pub trait Render {
    /// Append this value's HTML text to `out`.
    fn render_into(&self, out: &mut String);

    /// Produce this value's complete HTML text.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Implement [`std::fmt::Display`] for one or more [`Render`] types by
/// delegating to [`Render::render_into`].
#[macro_export]
macro_rules! display_via_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    let mut out = ::std::string::String::new();
                    $crate::Render::render_into(self, &mut out);
                    f.write_str(&out)
                }
            }
        )+
    };
}
