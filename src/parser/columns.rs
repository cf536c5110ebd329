//! Positional column resolution.

use crate::schema::XRange;

/// Outcome of placing an x-position into declared ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnMatch {
    /// Outside every range
    None,
    /// Inside exactly one range
    Unique(usize),
    /// Inside several ranges; the narrowest one won
    Narrowest(usize),
    /// Inside several equally narrow ranges; the first declared won
    Ambiguous { chosen: usize, rival: usize },
}

impl ColumnMatch {
    /// Index of the winning range.
    pub fn index(&self) -> Option<usize> {
        match *self {
            ColumnMatch::None => None,
            ColumnMatch::Unique(i) | ColumnMatch::Narrowest(i) => Some(i),
            ColumnMatch::Ambiguous { chosen, .. } => Some(chosen),
        }
    }
}

/// Place `x` into the narrowest range containing it.
pub(crate) fn resolve_column<'a, I>(x: f32, ranges: I, tolerance: f32) -> ColumnMatch
where
    I: IntoIterator<Item = &'a XRange>,
{
    let mut best: Option<(usize, f32)> = None;
    let mut rival: Option<usize> = None;
    let mut hits = 0;

    for (i, range) in ranges.into_iter().enumerate() {
        if !range.contains(x, tolerance) {
            continue;
        }
        hits += 1;
        match best {
            None => best = Some((i, range.width())),
            Some((_, width)) if range.width() < width => {
                best = Some((i, range.width()));
                rival = None;
            }
            Some((_, width)) if range.width() == width && rival.is_none() => rival = Some(i),
            _ => {}
        }
    }

    match (best, rival) {
        (None, _) => ColumnMatch::None,
        (Some((i, _)), _) if hits == 1 => ColumnMatch::Unique(i),
        (Some((chosen, _)), Some(rival)) => ColumnMatch::Ambiguous { chosen, rival },
        (Some((i, _)), None) => ColumnMatch::Narrowest(i),
    }
}
