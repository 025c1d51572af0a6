//! Reading-order trails over site documents.
//!
//! A trail imposes a (possibly nested) reading order on pages that are
//! otherwise linked independently, so every page can offer
//! previous / next / up / down navigation plus a generated listing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  TrailRegistry (owned by SiteConfig)                         │
//! │      │                                                       │
//! │      ▼  &[TrailItem]                                         │
//! │  ┌─────────┐    ┌────────────┐    ┌─────────────────────┐    │
//! │  │ search  │───▶│  navigate  │───▶│ render (markup)     │    │
//! │  │ (find)  │    │ up/next/.. │    │ commands (visit)    │    │
//! │  └─────────┘    └────────────┘    └─────────────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All operations borrow the forest immutably and never retain it.

pub mod check;
pub mod navigate;
pub mod registry;
pub mod render;
pub mod search;

pub use registry::TrailRegistry;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One level of reading order.
pub type Trail = Vec<TrailItem>;

/// A labeled link to a document, optionally owning a nested trail.
///
/// # Example
/// ```toml
/// [[trail.items]]
/// text = "Getting Started"
/// link = "getting-started"
///
///   [[trail.items.subtrail]]
///   text = "Install"
///   link = "install"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrailItem {
    /// Display label.
    pub text: String,

    /// Document stem this item points at (`posts/hello.typ` → `hello`).
    pub link: String,

    /// Nested reading order below this item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtrail: Option<Trail>,
}

#[cfg(test)]
impl TrailItem {
    /// Create a leaf item.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            subtrail: None,
        }
    }

    /// Attach a nested trail to this item.
    pub fn with_subtrail(mut self, subtrail: Trail) -> Self {
        self.subtrail = Some(subtrail);
        self
    }
}

/// Reduce a document identifier to its stem.
///
/// Directory components and the last extension are removed:
///
/// | Input | Stem |
/// |-------|------|
/// | `intro` | `intro` |
/// | `content/guide/s1.typ` | `s1` |
/// | `public/s1.html` | `s1` |
pub fn stem(identifier: &str) -> &str {
    Path::new(identifier)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(identifier)
}

/// Sample forest shared by the module tests:
///
/// ```text
/// Intro
/// Sub
///   S1
///   S2
/// End
/// ```
#[cfg(test)]
pub(crate) fn sample_forest() -> Trail {
    vec![
        TrailItem::new("Intro", "intro"),
        TrailItem::new("Sub", "sub").with_subtrail(vec![
            TrailItem::new("S1", "s1"),
            TrailItem::new("S2", "s2"),
        ]),
        TrailItem::new("End", "end"),
    ]
}
