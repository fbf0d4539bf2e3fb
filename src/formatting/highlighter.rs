//! Static token-class colouring of relevance text.
//!
//! Unlike the structural matchers this is a flat table of patterns. Rules
//! are applied in order and a later rule overrides an earlier one wherever
//! they overlap, so a keyword inside a string literal ends up coloured as
//! string, and anything inside a comment as comment.

use regex::Regex;

use crate::formatting::Syntax;

fn keywords() -> &'static Regex {
    crate::compile!(
        r"(?i)\b(?:if|then|else|of|whose|where|as|exists|not|and|or|contains|starts\s+with|ends\s+with|equals|mod|a|an|the|number|string|boolean|integer|true|false|relative|absolute)\b"
    )
}

fn operators() -> &'static Regex {
    crate::compile!(r"!=|<=|>=|[-+*/=<>|&]")
}

fn strings() -> &'static Regex {
    crate::compile!(r#""[^"]*"|'[^']*'"#)
}

fn numbers() -> &'static Regex {
    crate::compile!(r"\b\d+\.?\d*\b")
}

fn line_comments() -> &'static Regex {
    crate::compile!(r"//[^\n]*")
}

/// The query/answer protocol markers at the start of a line.
fn markers() -> &'static Regex {
    crate::compile!(r"(?im)^[qati]:")
}

fn error_lines() -> &'static Regex {
    crate::compile!(r"(?im)^e:[^\n]*")
}

/// Block comments may span lines; one left open runs to the end of text.
fn block_comments() -> &'static Regex {
    crate::compile!(r"(?s)/\*.*?(?:\*/|\z)")
}

fn rules() -> [(&'static Regex, Syntax); 8] {
    [
        (keywords(), Syntax::Keyword),
        (operators(), Syntax::Operator),
        (strings(), Syntax::String),
        (numbers(), Syntax::Numeric),
        (line_comments(), Syntax::Comment),
        (markers(), Syntax::Marker),
        (error_lines(), Syntax::Error),
        (block_comments(), Syntax::Comment),
    ]
}

/// Split text into fragments tagged by token class. Concatenating the
/// fragments gives back the input exactly.
pub fn highlight(text: &str) -> Vec<(Syntax, String)> {
    let mut classes = vec![Syntax::Neutral; text.len()];

    for (pattern, syntax) in rules() {
        for found in pattern.find_iter(text) {
            for class in &mut classes[found.range()] {
                *class = syntax;
            }
        }
    }

    let mut fragments: Vec<(Syntax, String)> = Vec::new();
    for (i, c) in text.char_indices() {
        let syntax = classes[i];
        match fragments.last_mut() {
            Some((current, content)) if *current == syntax => content.push(c),
            _ => fragments.push((syntax, c.to_string())),
        }
    }

    fragments
}
