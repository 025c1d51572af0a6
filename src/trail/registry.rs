//! The trail bound to a site.
//!
//! Each `SiteConfig` owns one registry, bound from `[[trail.items]]` when
//! the config is parsed. A missing key leaves the registry unbound, which
//! turns off navigation markup entirely.

use super::{Trail, TrailItem};

/// Holds at most one forest for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailRegistry {
    forest: Option<Trail>,
}

impl TrailRegistry {
    /// The bound forest, if any.
    pub fn bound(&self) -> Option<&[TrailItem]> {
        self.forest.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.forest.is_some()
    }

    /// Replace the bound forest, returning the one that was removed.
    pub fn bind(&mut self, forest: Trail) -> Option<Trail> {
        let old = self.forest.take();
        self.forest = Some(forest);
        old
    }
}
