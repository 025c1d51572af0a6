//! `[trail]` section configuration.
//!
//! Settings for navigation plus the trail itself, declared as nested
//! arrays of tables.

use super::defaults;
use crate::trail::{Trail, TrailRegistry};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[trail]` section in tola.toml.
///
/// # Example
/// ```toml
/// [trail]
/// index = "index"
/// strict = true
/// visit_command = ["xdg-open"]
///
/// [[trail.items]]
/// text = "Intro"
/// link = "intro"
///
/// [[trail.items]]
/// text = "Guide"
/// link = "guide"
///
///   [[trail.items.subtrail]]
///   text = "Install"
///   link = "install"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    /// Stem of the page that lists the whole trail.
    #[serde(default = "defaults::trail::index")]
    #[educe(Default = defaults::trail::index())]
    pub index: String,

    /// Reject duplicate or dangling links when loading.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub strict: bool,

    /// Program (plus leading arguments) used to open visited documents.
    /// Empty prints the document path instead.
    #[serde(default = "defaults::trail::visit_command")]
    #[educe(Default = defaults::trail::visit_command())]
    pub visit_command: Vec<String>,

    /// Trail as declared in `[[trail.items]]`, moved into `registry` on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Trail>,

    /// The bound trail. Absent `items` means no trail at all.
    #[serde(skip)]
    pub registry: TrailRegistry,
}
