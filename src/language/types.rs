//! Types describing the structure found in a relevance expression

use serde::Serialize;

/// Classification of a token produced by the tokenizer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    If,
    Then,
    Else,
    Text,
}

/// A slice of the original text along with its `[start, end)` range in
/// character offsets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'i> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub text: &'i str,
}

/// The words the matchers care about. Matching against source is case
/// insensitive; the lower-cased form is what gets recorded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Word {
    If,
    Then,
    Else,
    It,
    Its,
    Them,
}

impl Word {
    pub fn lookup(word: &str) -> Option<Word> {
        match word
            .to_ascii_lowercase()
            .as_str()
        {
            "if" => Some(Word::If),
            "then" => Some(Word::Then),
            "else" => Some(Word::Else),
            "it" => Some(Word::It),
            "its" => Some(Word::Its),
            "them" => Some(Word::Them),
            _ => None,
        }
    }
}

/// One place a keyword or pronoun appears in the text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Occurrence {
    pub word: Word,
    pub start: usize,
    pub end: usize,
}

impl Occurrence {
    /// Whether a cursor at `offset` is on (or immediately either side of)
    /// this occurrence.
    pub fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }
}

/// A `[start, end)` range of character offsets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    pub fn single(offset: usize) -> Span {
        Span {
            start: offset,
            end: offset + 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    Matched,
    Unmatched,
}

/// The unit of output handed back to an editing surface: paint this range
/// with this classification.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
    pub class: Class,
}

impl Highlight {
    pub fn new(span: Span, class: Class) -> Highlight {
        Highlight {
            start: span.start,
            end: span.end,
            class,
        }
    }

    pub fn matched(span: Span) -> Highlight {
        Highlight::new(span, Class::Matched)
    }

    pub fn unmatched(span: Span) -> Highlight {
        Highlight::new(span, Class::Unmatched)
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }
}
