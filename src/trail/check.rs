//! Trail diagnostics.
//!
//! Navigation tolerates a malformed trail: duplicate links resolve to the
//! first pre-order match and dangling links simply lead nowhere. These
//! checks surface both cases so `tola-trail check` (or `strict = true`)
//! can reject them before a build.

use super::TrailItem;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{fmt, path::Path};
use walkdir::WalkDir;

/// A single problem found in a trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// `link` appears `count` times.
    Duplicate { link: String, count: usize },
    /// No source document has `link` as its stem.
    Dangling { link: String },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { link, count } => {
                write!(f, "link `{link}` appears {count} times, only the first is reachable")
            }
            Self::Dangling { link } => write!(f, "link `{link}` has no source document"),
        }
    }
}

/// Links in pre-order, duplicates included.
pub fn links(forest: &[TrailItem]) -> Vec<&str> {
    fn walk<'a>(items: &'a [TrailItem], out: &mut Vec<&'a str>) {
        for item in items {
            out.push(&item.link);
            if let Some(subtrail) = &item.subtrail {
                walk(subtrail, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(forest, &mut out);
    out
}

/// Links occurring more than once, in order of first appearance.
pub fn duplicates(forest: &[TrailItem]) -> Vec<Problem> {
    let links = links(forest);
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for &link in &links {
        *counts.entry(link).or_default() += 1;
    }

    let mut reported = FxHashSet::default();
    links
        .into_iter()
        .filter(|link| counts[link] > 1 && reported.insert(*link))
        .map(|link| Problem::Duplicate {
            link: link.to_owned(),
            count: counts[link],
        })
        .collect()
}

/// Links without a `{content}/**/{link}.{extension}` document.
///
/// Skipped (empty result) when `content` does not exist.
pub fn dangling(forest: &[TrailItem], content: &Path, extension: &str) -> Vec<Problem> {
    if !content.is_dir() {
        return Vec::new();
    }

    let stems: FxHashSet<String> = WalkDir::new(content)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == extension))
        .filter_map(|entry| {
            entry
                .path()
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_owned)
        })
        .collect();

    let mut reported = FxHashSet::default();
    links(forest)
        .into_iter()
        .filter(|link| !stems.contains(*link) && reported.insert(*link))
        .map(|link| Problem::Dangling {
            link: link.to_owned(),
        })
        .collect()
}

/// All problems: duplicates first, then dangling links.
pub fn check(forest: &[TrailItem], content: &Path, extension: &str) -> Vec<Problem> {
    let mut problems = duplicates(forest);
    problems.extend(dangling(forest, content, extension));
    problems
}
