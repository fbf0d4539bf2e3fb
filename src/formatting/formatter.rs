//! Pretty-printer for relevance expressions

use tracing::debug;

use crate::analysis::tokenize;
use crate::formatting::*;
use crate::language::TokenKind;

const INDENT: &str = "    ";

/// Toggle an expression between its compact and expanded forms. Text that
/// (once trimmed) spans several lines is collapsed onto one; a single line
/// is expanded.
pub fn reformat(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        String::new()
    } else if text.contains('\n') {
        debug!("compacting");
        compact(text)
    } else {
        debug!("expanding");
        expand(text)
    }
}

/// Collapse every run of whitespace to a single space.
pub fn compact(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay an expression out one clause per line, indented by nesting depth.
pub fn expand(text: &str) -> String {
    combine(&expand_to_fragments(text))
}

/// As `expand()`, but returning tagged fragments so the result can be
/// rendered with colour.
pub fn expand_to_fragments(text: &str) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    for token in tokenize(text) {
        match token.kind {
            TokenKind::OpenParen => {
                output.flush_current();
                output.append_line(Syntax::Structure, "(");
                output.increase();
            }
            TokenKind::CloseParen => {
                output.flush_current();
                output.decrease();
                output.append_line(Syntax::Structure, ")");
            }
            TokenKind::If | TokenKind::Then | TokenKind::Else => {
                output.flush_current();
                output.append_word(Syntax::Keyword, token.text);
            }
            TokenKind::Text => {
                let content = token
                    .text
                    .trim();
                if content.is_empty() {
                    output.append_space();
                } else {
                    output.append_word(Syntax::Neutral, content);
                }
            }
        }
    }

    output.flush_current();
    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
    nesting: usize,
    buffer: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
            nesting: 0,
            buffer: Vec::new(),
        }
    }

    fn increase(&mut self) {
        self.nesting += 1;
    }

    /// Unbalanced closers leave the indent at the left margin rather than
    /// going negative.
    fn decrease(&mut self) {
        self.nesting = self
            .nesting
            .saturating_sub(1);
    }

    fn start_line(&mut self) {
        if !self
            .fragments
            .is_empty()
        {
            self.fragments
                .push((Syntax::Newline, "\n".to_string()));
        }
        if self.nesting > 0 {
            self.fragments
                .push((Syntax::Indent, INDENT.repeat(self.nesting)));
        }
    }

    /// Emit content alone on its own line at the current indent.
    fn append_line(&mut self, syntax: Syntax, content: &str) {
        self.start_line();
        self.fragments
            .push((syntax, content.to_string()));
    }

    /// Add a word to the line being accumulated, followed by a separating
    /// space.
    fn append_word(&mut self, syntax: Syntax, content: &str) {
        self.buffer
            .push((syntax, content.to_string()));
        self.buffer
            .push((Syntax::Neutral, " ".to_string()));
    }

    fn append_space(&mut self) {
        let ends_with_space = match self
            .buffer
            .last()
        {
            Some((_, content)) => content.ends_with(' '),
            None => true,
        };
        if !ends_with_space {
            self.buffer
                .push((Syntax::Neutral, " ".to_string()));
        }
    }

    /// Write out the accumulated line, if it has any content, without its
    /// trailing space.
    fn flush_current(&mut self) {
        while let Some((_, content)) = self
            .buffer
            .last()
        {
            if content
                .trim()
                .is_empty()
            {
                self.buffer
                    .pop();
            } else {
                break;
            }
        }

        if self
            .buffer
            .is_empty()
        {
            return;
        }

        self.start_line();
        self.fragments
            .append(&mut self.buffer);
    }
}
