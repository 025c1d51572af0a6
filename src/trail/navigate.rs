//! Neighbors of a located item.
//!
//! `up`, `next` and `previous` take the whole forest plus an item obtained
//! from [`find`](super::search::find). Items are compared by value, not by
//! link.
//!
//! # Level-local policy
//!
//! Next and previous never leave the level where the target was matched:
//!
//! ```text
//! Intro
//! Sub          next(Sub) = End, previous(Sub) = Intro
//!   S1         previous(S1) = none (no climbing to Intro)
//!   S2         next(S2)     = none (no climbing to End)
//! End
//! ```

use super::TrailItem;

/// Outcome of a scan over one subtree.
///
/// Kept apart from `Option` so that "matched, but no neighbor" stops the
/// scan instead of falling through to later siblings.
enum Scan<'a> {
    Missing,
    Matched(Option<&'a TrailItem>),
}

impl<'a> Scan<'a> {
    fn into_neighbor(self) -> Option<&'a TrailItem> {
        match self {
            Scan::Missing => None,
            Scan::Matched(neighbor) => neighbor,
        }
    }
}

/// The item whose subtrail directly contains `target`.
///
/// Returns `None` for top-level items.
pub fn up<'a>(forest: &'a [TrailItem], target: &TrailItem) -> Option<&'a TrailItem> {
    for item in forest {
        let Some(subtrail) = &item.subtrail else {
            continue;
        };
        if subtrail.contains(target) {
            return Some(item);
        }
        if let Some(owner) = up(subtrail, target) {
            return Some(owner);
        }
    }
    None
}

/// The sibling right after `target` on its own level.
pub fn next<'a>(forest: &'a [TrailItem], target: &TrailItem) -> Option<&'a TrailItem> {
    scan_next(forest, target).into_neighbor()
}

fn scan_next<'a>(level: &'a [TrailItem], target: &TrailItem) -> Scan<'a> {
    let Some((first, rest)) = level.split_first() else {
        return Scan::Missing;
    };

    if first == target {
        return Scan::Matched(rest.first());
    }

    if let Some(subtrail) = &first.subtrail
        && let matched @ Scan::Matched(_) = scan_next(subtrail, target)
    {
        return matched;
    }

    scan_next(rest, target)
}

/// The sibling right before `target` on its own level.
pub fn previous<'a>(forest: &'a [TrailItem], target: &TrailItem) -> Option<&'a TrailItem> {
    scan_previous(forest, target, None).into_neighbor()
}

/// `last_seen` is the sibling before `level[0]`, reset on every descent.
fn scan_previous<'a>(
    level: &'a [TrailItem],
    target: &TrailItem,
    last_seen: Option<&'a TrailItem>,
) -> Scan<'a> {
    let Some((first, rest)) = level.split_first() else {
        return Scan::Missing;
    };

    if first == target {
        return Scan::Matched(last_seen);
    }

    if let Some(subtrail) = &first.subtrail
        && let matched @ Scan::Matched(_) = scan_previous(subtrail, target, None)
    {
        return matched;
    }

    scan_previous(rest, target, Some(first))
}

/// First item of `item`'s subtrail.
pub fn down(item: &TrailItem) -> Option<&TrailItem> {
    item.subtrail.as_deref().and_then(<[TrailItem]>::first)
}
