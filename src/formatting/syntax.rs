//! Classes of rendered content, and the trait renderers implement

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Neutral, // default
    Indent,
    Newline,
    Keyword,
    Structure,
    Operator,
    String,
    Numeric,
    Comment,
    Marker,
    Error,
}

/// Trait for different rendering backends (the no-op no-markup one, and ANSI
/// escapes for terminal colouring)
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, content_type: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}
