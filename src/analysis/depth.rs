//! Parenthesis depth tracking

/// Net count of unclosed `(` before `offset`. Excess closers drive this
/// negative rather than being clamped; callers only ever compare depths
/// relative to one another, so a negative value still orders correctly.
pub fn depth_at(chars: &[char], offset: usize) -> isize {
    let offset = offset.min(chars.len());
    let mut depth = 0;
    for c in &chars[..offset] {
        depth += step(*c);
    }
    depth
}

/// The change in depth contributed by one character when scanning forward.
pub(crate) fn step(c: char) -> isize {
    match c {
        '(' => 1,
        ')' => -1,
        _ => 0,
    }
}

/// Running depth while walking outward from an anchor, either forward or
/// backward. Walking backward over a `(` leaves the enclosing group, so it
/// lowers the depth; walking backward over a `)` enters a group.
#[derive(Debug)]
pub(crate) struct Walk {
    pub(crate) floor: isize,
    pub(crate) depth: isize,
}

impl Walk {
    pub(crate) fn new(depth: isize) -> Walk {
        Walk {
            floor: depth,
            depth,
        }
    }

    /// Advance forward over `chars`; returns false as soon as the depth
    /// drops below where the walk started.
    pub(crate) fn forward(&mut self, chars: &[char]) -> bool {
        for c in chars {
            self.depth += step(*c);
            if self.depth < self.floor {
                return false;
            }
        }
        true
    }

    /// Retreat backward over `chars` (given in their natural order; they are
    /// visited last to first).
    pub(crate) fn backward(&mut self, chars: &[char]) -> bool {
        for c in chars
            .iter()
            .rev()
        {
            self.depth -= step(*c);
            if self.depth < self.floor {
                return false;
            }
        }
        true
    }
}
