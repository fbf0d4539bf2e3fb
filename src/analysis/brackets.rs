//! Bracket matching around the cursor

use tracing::debug;

use crate::analysis::source::Source;
use crate::language::{Highlight, Span};

const PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

fn is_bracket(c: char) -> bool {
    PAIRS
        .iter()
        .any(|(open, close)| c == *open || c == *close)
}

/// Scan forward from just after an opener at `start` for the closer that
/// brings the count of `open` back to zero.
pub(crate) fn closing(chars: &[char], start: usize, open: char, close: char) -> Option<usize> {
    let mut count = 1;
    for (i, c) in chars
        .iter()
        .enumerate()
        .skip(start + 1)
    {
        if *c == open {
            count += 1;
        } else if *c == close {
            count -= 1;
            if count == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Scan backward from just before a closer at `start` for its opener.
pub(crate) fn opening(chars: &[char], start: usize, open: char, close: char) -> Option<usize> {
    let mut count = 1;
    for i in (0..start.min(chars.len())).rev() {
        let c = chars[i];
        if c == close {
            count += 1;
        } else if c == open {
            count -= 1;
            if count == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Given the position of a bracket character, find its partner of the same
/// kind. Mismatched kinds are never paired.
pub fn partner(chars: &[char], position: usize) -> Option<usize> {
    let c = *chars.get(position)?;
    for (open, close) in PAIRS {
        if c == open {
            return closing(chars, position, open, close);
        }
        if c == close {
            return opening(chars, position, open, close);
        }
    }
    None
}

/// Highlight the bracket next to the cursor and its partner. The character
/// just before the cursor wins over the one at the cursor, so a bracket
/// that was just typed is the one considered.
pub fn match_bracket(text: &str, offset: usize) -> Option<Vec<Highlight>> {
    let source = Source::new(text);
    let offset = source.clamp(offset);
    let chars = source.chars();

    let before = offset
        .checked_sub(1)
        .filter(|i| is_bracket(chars[*i]));
    let at = Some(offset).filter(|i| {
        chars
            .get(*i)
            .is_some_and(|c| is_bracket(*c))
    });

    let position = before.or(at)?;

    match partner(chars, position) {
        Some(other) => {
            debug!(position, other, "bracket matched");
            Some(vec![
                Highlight::matched(Span::single(position)),
                Highlight::matched(Span::single(other)),
            ])
        }
        None => {
            debug!(position, "bracket unmatched");
            Some(vec![Highlight::unmatched(Span::single(position))])
        }
    }
}
