use crate::formatting::*;

/// Fragments are produced in a first pass (by the pretty-printer or the
/// token-class highlighter); here in the second pass the specified renderer
/// applies markup to each (Syntax tag, String) pair and the results are
/// combined into an embellished/highlighted String.
pub fn render(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}
