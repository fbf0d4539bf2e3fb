//! Structural hints for relevance expressions: bracket matching,
//! `if`/`then`/`else` grouping, pronoun referents, and reformatting.
//!
//! Every operation is a pure function of the text (and cursor offset)
//! given to it, cheap enough to call on each keystroke.

pub mod analysis;
pub mod formatting;
pub mod language;
mod regex;
pub mod rendering;
