//! Tokenizer splitting an expression into its structurally significant
//! pieces

use regex::Regex;

use crate::analysis::source::Source;
use crate::language::{Token, TokenKind};

fn delimiters() -> &'static Regex {
    crate::compile!(r"(?i)\(|\)|\bif\b|\bthen\b|\belse\b")
}

fn classify(delimiter: &str) -> TokenKind {
    match delimiter {
        "(" => TokenKind::OpenParen,
        ")" => TokenKind::CloseParen,
        _ => match delimiter
            .to_ascii_lowercase()
            .as_str()
        {
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            _ => TokenKind::Text,
        },
    }
}

fn push<'i>(
    tokens: &mut Vec<Token<'i>>,
    source: &Source<'i>,
    kind: TokenKind,
    from: usize,
    to: usize,
) {
    if from < to {
        tokens.push(Token {
            kind,
            start: source.character_offset(from),
            end: source.character_offset(to),
            text: &source.text()[from..to],
        });
    }
}

/// Split text into tokens. The tokens partition the text exactly: no gaps,
/// no overlaps, and concatenating their `text` gives back the input.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let source = Source::new(text);
    let mut tokens = Vec::new();
    let mut last = 0;

    for found in delimiters().find_iter(text) {
        push(&mut tokens, &source, TokenKind::Text, last, found.start());
        push(
            &mut tokens,
            &source,
            classify(found.as_str()),
            found.start(),
            found.end(),
        );
        last = found.end();
    }
    push(&mut tokens, &source, TokenKind::Text, last, text.len());

    tokens
}
