//! Character-indexed view over the text being analyzed

use regex::Regex;

use crate::language::{Occurrence, Span, Word};

/// Whole-word `if`, `then`, or `else`, in any case.
pub fn block_keywords() -> &'static Regex {
    crate::compile!(r"(?i)\b(?:if|then|else)\b")
}

/// Whole-word `it`, `its`, or `them`, in any case.
pub fn pronouns() -> &'static Regex {
    crate::compile!(r"(?i)\b(?:it|its|them)\b")
}

/// The text supplied by the caller for one analysis call. All positions
/// handed in and out of the analysis are character offsets; the regex
/// engine works in bytes, so we keep the mapping between the two here.
#[derive(Debug)]
pub struct Source<'i> {
    text: &'i str,
    chars: Vec<char>,
    offsets: Vec<usize>,
}

impl<'i> Source<'i> {
    pub fn new(text: &'i str) -> Source<'i> {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);

        for (i, c) in text.char_indices() {
            chars.push(c);
            offsets.push(i);
        }
        offsets.push(text.len());

        Source {
            text,
            chars,
            offsets,
        }
    }

    pub fn text(&self) -> &'i str {
        self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars
            .is_empty()
    }

    /// Convert a byte offset (as reported by the regex engine) into a
    /// character offset. Byte offsets inside a multi-byte character round
    /// down to that character.
    pub fn character_offset(&self, byte: usize) -> usize {
        match self
            .offsets
            .binary_search(&byte)
        {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        }
    }

    pub fn byte_offset(&self, offset: usize) -> usize {
        let offset = offset.min(self.len());
        self.offsets[offset]
    }

    /// The text covered by a span of character offsets.
    pub fn slice(&self, span: Span) -> &'i str {
        let start = self.byte_offset(span.start);
        let end = self.byte_offset(span.end);
        if start >= end {
            return "";
        }
        &self.text[start..end]
    }

    /// Keep an offset from the caller within `[0, len]`.
    pub fn clamp(&self, offset: usize) -> usize {
        offset.min(self.len())
    }
}

/// Scan the whole text once for every whole-word match of the given
/// pattern, in positional order.
pub fn occurrences(source: &Source, pattern: &Regex) -> Vec<Occurrence> {
    pattern
        .find_iter(source.text())
        .filter_map(|found| {
            let word = Word::lookup(found.as_str())?;
            Some(Occurrence {
                word,
                start: source.character_offset(found.start()),
                end: source.character_offset(found.end()),
            })
        })
        .collect()
}

/// The first occurrence the cursor is on, if any.
pub fn anchor_at(occurrences: &[Occurrence], offset: usize) -> Option<Occurrence> {
    occurrences
        .iter()
        .find(|occurrence| occurrence.touches(offset))
        .copied()
}
