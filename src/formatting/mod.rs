//! Reformatting and colouring of relevance expressions

mod formatter;
mod highlighter;
mod syntax;

pub use formatter::{compact, expand, expand_to_fragments, reformat};
pub use highlighter::highlight;
pub use syntax::*;

/// Concatenate fragments back into plain text.
pub fn combine(fragments: &[(Syntax, String)]) -> String {
    fragments
        .iter()
        .map(|(_, content)| content.as_str())
        .collect()
}
