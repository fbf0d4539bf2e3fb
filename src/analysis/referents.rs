//! Resolving what an anaphoric `it`, `its`, or `them` refers to.
//!
//! Two idioms are recognized. In `files whose (it contains "x")` the
//! pronoun inside a `whose` clause refers to whatever immediately precedes
//! `whose`. In `(name of it, version of it) of operating system` a pronoun
//! following `of` inside a parenthesized group refers to the object named
//! after the `of` that follows the group. The `whose` form is tried first.

use regex::Regex;
use tracing::debug;

use crate::analysis::brackets::{closing, opening};
use crate::analysis::source::{anchor_at, occurrences, pronouns, Source};
use crate::language::{Highlight, Occurrence, Span};

fn whose_clauses() -> &'static Regex {
    crate::compile!(r"(?i)\bwhose\s*\(")
}

/// Characters that end a bare word when looking backward from `whose`.
fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || "()[]{},:;".contains(c)
}

/// Highlight the pronoun under the cursor together with its referent and
/// every other pronoun sharing that referent.
pub fn resolve_referent(text: &str, offset: usize) -> Option<Vec<Highlight>> {
    let source = Source::new(text);
    let offset = source.clamp(offset);
    let candidates = occurrences(&source, pronouns());
    let anchor = anchor_at(&candidates, offset)?;

    let referent = match find_referent(&source, anchor) {
        Some(referent) => referent,
        None => {
            debug!(?anchor, "no referent");
            return Some(vec![Highlight::unmatched(anchor.span())]);
        }
    };

    debug!(?anchor, ?referent, "referent resolved");

    let mut result = vec![
        Highlight::matched(anchor.span()),
        Highlight::matched(referent),
    ];

    for other in &candidates {
        if other.start == anchor.start {
            continue;
        }
        if find_referent(&source, *other) == Some(referent) {
            result.push(Highlight::matched(other.span()));
        }
    }

    Some(result)
}

/// The span a single pronoun refers to, if either idiom applies.
pub fn find_referent(source: &Source, pronoun: Occurrence) -> Option<Span> {
    whose_context(source, pronoun.start).or_else(|| of_context(source, pronoun.start))
}

/// Pronoun inside `whose ( ... )`: the referent is what precedes `whose`.
fn whose_context(source: &Source, position: usize) -> Option<Span> {
    let chars = source.chars();

    // clauses containing the pronoun, tried innermost first; an unclosed
    // clause contains everything after its opening parenthesis.
    let clauses: Vec<usize> = whose_clauses()
        .find_iter(source.text())
        .filter(|found| {
            let open = source.character_offset(found.end()) - 1;
            match closing(chars, open, '(', ')') {
                Some(close) => open < position && position <= close,
                None => open < position,
            }
        })
        .map(|found| source.character_offset(found.start()))
        .collect();

    clauses
        .into_iter()
        .rev()
        .find_map(|start| preceding_subject(chars, start))
}

/// The word or parenthesized group just before a `whose` at `start`.
fn preceding_subject(chars: &[char], start: usize) -> Option<Span> {
    let mut end = start;
    while end > 0 && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    if end == 0 {
        return None;
    }

    if chars[end - 1] == ')' {
        let start = opening(chars, end - 1, '(', ')')?;
        return Some(Span::new(start, end));
    }

    let mut start = end;
    while start > 0 && !is_word_boundary(chars[start - 1]) {
        start -= 1;
    }

    if start < end {
        Some(Span::new(start, end))
    } else {
        None
    }
}

/// Whether the text before `position`, ignoring trailing whitespace, ends
/// with `of` preceded by whitespace.
fn follows_of(chars: &[char], position: usize) -> bool {
    let mut end = position.min(chars.len());
    while end > 0 && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    if end < 3 {
        return false;
    }
    chars[end - 2].eq_ignore_ascii_case(&'o')
        && chars[end - 1].eq_ignore_ascii_case(&'f')
        && chars[end - 3].is_whitespace()
}

/// Pronoun in `( ... of it ... ) of <object>`: the referent is the object.
fn of_context(source: &Source, position: usize) -> Option<Span> {
    let chars = source.chars();

    if !follows_of(chars, position) {
        return None;
    }

    let open = opening(chars, position, '(', ')')?;
    let close = closing(chars, open, '(', ')')?;

    let mut i = close + 1;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }

    let keyword = chars.get(i..i + 2)?;
    if !keyword[0].eq_ignore_ascii_case(&'o') || !keyword[1].eq_ignore_ascii_case(&'f') {
        return None;
    }
    i += 2;
    if !chars
        .get(i)
        .is_some_and(|c| c.is_whitespace())
    {
        return None;
    }
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }

    let start = i;
    let mut end = start;
    let mut depth = 0;

    while end < chars.len() {
        match chars[end] {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            '\n' => break,
            _ => {}
        }
        end += 1;
    }

    while end > start && matches!(chars[end - 1], ' ' | '\t') {
        end -= 1;
    }

    if end > start {
        Some(Span::new(start, end))
    } else {
        None
    }
}
