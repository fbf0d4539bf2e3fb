//! Structural analysis of relevance expressions at a cursor position

use std::io::Read;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, warn};

use crate::language::{Highlight, LoadingError};

mod blocks;
mod brackets;
mod depth;
mod referents;
mod source;
mod tokens;

pub use blocks::{find_group, match_block, Group};
pub use brackets::{match_bracket, partner};
pub use referents::{find_referent, resolve_referent};
pub use source::{anchor_at, block_keywords, occurrences, pronouns, Source};
pub use tokens::tokenize;

/// Parenthesis depth at a character offset of `text`.
pub fn depth_at(text: &str, offset: usize) -> isize {
    let source = Source::new(text);
    depth::depth_at(source.chars(), offset)
}

/// Read an expression from a file, or from standard input if the filename
/// is `-`.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Work out what the cursor at `offset` is on and return the spans an
/// editor should paint. A pronoun takes priority over a conditional keyword,
/// which takes priority over a bracket. Offsets past the end of the text are
/// clamped to its length.
///
/// This is called on every keystroke, so it never fails: should anything go
/// wrong internally the result is simply an empty list.
pub fn analyze_at(text: &str, offset: usize) -> Vec<Highlight> {
    if text.is_empty() {
        return Vec::new();
    }

    let result = catch_unwind(AssertUnwindSafe(|| {
        resolve_referent(text, offset)
            .or_else(|| match_block(text, offset))
            .or_else(|| match_bracket(text, offset))
            .unwrap_or_default()
    }));

    match result {
        Ok(highlights) => highlights,
        Err(_) => {
            warn!(offset, "analysis failed; no highlights");
            Vec::new()
        }
    }
}
