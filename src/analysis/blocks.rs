//! Matching `if` / `then` / `else` keywords that belong together.
//!
//! There is no grammar here. From the keyword under the cursor we walk
//! outward through the other keyword occurrences, keeping a running
//! parenthesis depth so the search never escapes the group enclosing the
//! anchor, and a nesting counter so that a complete inner conditional at the
//! same depth is stepped over as a unit rather than mistaken for the
//! anchor's own peers.

use tracing::debug;

use crate::analysis::depth::{depth_at, Walk};
use crate::analysis::source::{anchor_at, block_keywords, occurrences, Source};
use crate::language::{Highlight, Occurrence, Word};

/// The members of one conditional that could be found.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Group {
    pub condition: Option<Occurrence>,
    pub consequent: Option<Occurrence>,
    pub alternative: Option<Occurrence>,
}

impl Group {
    pub fn is_complete(&self) -> bool {
        self.condition
            .is_some()
            && self
                .consequent
                .is_some()
            && self
                .alternative
                .is_some()
    }

    /// One span per keyword found, in source order. A partial group is
    /// reported as unmatched in its entirety.
    pub fn highlights(&self) -> Vec<Highlight> {
        let complete = self.is_complete();

        [self.condition, self.consequent, self.alternative]
            .into_iter()
            .flatten()
            .map(|keyword| {
                if complete {
                    Highlight::matched(keyword.span())
                } else {
                    Highlight::unmatched(keyword.span())
                }
            })
            .collect()
    }
}

/// Highlight the conditional the cursor is on, if it is on `if`, `then`, or
/// `else`.
pub fn match_block(text: &str, offset: usize) -> Option<Vec<Highlight>> {
    let source = Source::new(text);
    let offset = source.clamp(offset);
    let keywords = occurrences(&source, block_keywords());
    let anchor = anchor_at(&keywords, offset)?;

    let group = find_group(source.chars(), &keywords, anchor);
    debug!(?anchor, complete = group.is_complete(), "keyword block");

    Some(group.highlights())
}

/// Find the other members of the anchor's conditional. `keywords` must be
/// every block keyword occurrence in the text, in positional order.
pub fn find_group(chars: &[char], keywords: &[Occurrence], anchor: Occurrence) -> Group {
    match anchor.word {
        Word::If => group_for_if(chars, keywords, anchor),
        Word::Then => group_for_then(chars, keywords, anchor),
        Word::Else => group_for_else(chars, keywords, anchor),
        _ => Group::default(),
    }
}

fn following<'a>(
    keywords: &'a [Occurrence],
    anchor: Occurrence,
) -> impl Iterator<Item = &'a Occurrence> {
    keywords
        .iter()
        .filter(move |keyword| keyword.start > anchor.start)
}

fn preceding<'a>(
    keywords: &'a [Occurrence],
    anchor: Occurrence,
) -> impl Iterator<Item = &'a Occurrence> {
    keywords
        .iter()
        .rev()
        .filter(move |keyword| keyword.start < anchor.start)
}

fn group_for_if(chars: &[char], keywords: &[Occurrence], anchor: Occurrence) -> Group {
    let mut group = Group {
        condition: Some(anchor),
        ..Group::default()
    };

    let mut walk = Walk::new(depth_at(chars, anchor.start));
    let mut nesting = 0;
    let mut previous = anchor.end;

    for keyword in following(keywords, anchor) {
        if !walk.forward(&chars[previous..keyword.start]) {
            break;
        }
        previous = keyword.end;

        match keyword.word {
            Word::If => nesting += 1,
            Word::Then => {
                if nesting == 0 && group.consequent.is_none() {
                    group.consequent = Some(*keyword);
                }
            }
            Word::Else => {
                if nesting > 0 {
                    nesting -= 1;
                } else if group.consequent.is_some() {
                    group.alternative = Some(*keyword);
                    break;
                }
            }
            _ => {}
        }
    }

    group
}

fn group_for_then(chars: &[char], keywords: &[Occurrence], anchor: Occurrence) -> Group {
    let depth = depth_at(chars, anchor.start);

    let mut group = Group {
        consequent: Some(anchor),
        ..Group::default()
    };

    let mut walk = Walk::new(depth);
    let mut nesting = 0;
    let mut previous = anchor.start;

    for keyword in preceding(keywords, anchor) {
        if !walk.backward(&chars[keyword.end..previous]) {
            break;
        }
        previous = keyword.start;

        match keyword.word {
            Word::Then => nesting += 1,
            Word::If => {
                if nesting == 0 {
                    group.condition = Some(*keyword);
                    break;
                }
                nesting -= 1;
            }
            _ => {}
        }
    }

    if group
        .condition
        .is_some()
    {
        group.alternative = alternative_after(chars, keywords, anchor, depth);
    }

    group
}

/// The first `else` after `from` not claimed by a nested `if`.
fn alternative_after(
    chars: &[char],
    keywords: &[Occurrence],
    from: Occurrence,
    depth: isize,
) -> Option<Occurrence> {
    let mut walk = Walk::new(depth);
    let mut nesting = 0;
    let mut previous = from.end;

    for keyword in following(keywords, from) {
        if !walk.forward(&chars[previous..keyword.start]) {
            return None;
        }
        previous = keyword.end;

        match keyword.word {
            Word::If => nesting += 1,
            Word::Else => {
                if nesting == 0 {
                    return Some(*keyword);
                }
                nesting -= 1;
            }
            _ => {}
        }
    }

    None
}

fn group_for_else(chars: &[char], keywords: &[Occurrence], anchor: Occurrence) -> Group {
    let mut group = Group {
        alternative: Some(anchor),
        ..Group::default()
    };

    let mut walk = Walk::new(depth_at(chars, anchor.start));
    let mut nesting = 0;
    let mut previous = anchor.start;

    for keyword in preceding(keywords, anchor) {
        if !walk.backward(&chars[keyword.end..previous]) {
            break;
        }
        previous = keyword.start;

        match keyword.word {
            Word::Else => nesting += 1,
            Word::Then => {
                if nesting == 0 && group.consequent.is_none() {
                    group.consequent = Some(*keyword);
                }
            }
            Word::If => {
                if nesting > 0 {
                    nesting -= 1;
                } else if group.consequent.is_some() {
                    group.condition = Some(*keyword);
                    break;
                }
            }
            _ => {}
        }
    }

    group
}
