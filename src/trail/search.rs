//! Locating a document inside a trail.
//!
//! Search is pre-order and depth-first: an item's subtrail is searched
//! before its following siblings, and the first match wins.

use super::{TrailItem, stem};

/// Find the item whose `link` matches the stem of `identifier`.
///
/// ```text
/// [A [B], C]    find(.., "b") visits A, B  (C is never examined)
/// ```
pub fn find<'a>(trail: &'a [TrailItem], identifier: &str) -> Option<&'a TrailItem> {
    find_stem(trail, stem(identifier))
}

/// Whether any item in `trail` (at any depth) matches `identifier`.
pub fn contains(trail: &[TrailItem], identifier: &str) -> bool {
    find(trail, identifier).is_some()
}

fn find_stem<'a>(trail: &'a [TrailItem], stem: &str) -> Option<&'a TrailItem> {
    let (first, rest) = trail.split_first()?;

    if first.link == stem {
        return Some(first);
    }

    if let Some(subtrail) = &first.subtrail
        && let Some(found) = find_stem(subtrail, stem)
    {
        return Some(found);
    }

    find_stem(rest, stem)
}
