//! Interactive navigation commands.
//!
//! The four commands (`visit-next`, `visit-previous`, `visit-up`,
//! `visit-down`) resolve the host's current document in the trail and ask
//! the host to open the neighbor. A missing neighbor is reported as a
//! message, never as an error.
//!
//! | Command | Target | Identifier passed to `visit_document` |
//! |---------|--------|---------------------------------------|
//! | `visit-next` | following sibling | `link` |
//! | `visit-previous` | preceding sibling | `link` |
//! | `visit-up` | owning item | `link` |
//! | `visit-down` | first subtrail item | `link.{extension}` |

use crate::trail::{TrailItem, navigate, search, stem};
use anyhow::Result;

/// Collaborator that owns documents and performs the actual visit.
pub trait Host {
    /// Identifier (path or name) of the document the user is on.
    fn current_document(&self) -> String;

    /// Open the document named by `identifier`.
    fn visit_document(&mut self, identifier: &str) -> Result<()>;

    /// Show an informational message to the user.
    fn message(&mut self, message: &str);
}

/// Navigation direction of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
    Up,
    Down,
}

/// Command table exposed to hosts.
pub const COMMANDS: [(&str, Direction); 4] = [
    ("visit-next", Direction::Next),
    ("visit-previous", Direction::Previous),
    ("visit-up", Direction::Up),
    ("visit-down", Direction::Down),
];

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Look a command up by its table name.
    pub fn from_command(command: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|(name, _)| *name == command)
            .map(|(_, direction)| *direction)
    }

    fn target<'a>(self, forest: &'a [TrailItem], item: &'a TrailItem) -> Option<&'a TrailItem> {
        match self {
            Self::Next => navigate::next(forest, item),
            Self::Previous => navigate::previous(forest, item),
            Self::Up => navigate::up(forest, item),
            Self::Down => navigate::down(item),
        }
    }
}

/// Run one navigation command against `forest`.
///
/// Returns whether a document was visited. `extension` is the native
/// source extension, appended for `Down` only.
pub fn run(
    direction: Direction,
    forest: &[TrailItem],
    extension: &str,
    host: &mut impl Host,
) -> Result<bool> {
    let current = host.current_document();

    let Some(item) = search::find(forest, &current) else {
        host.message(&format!("`{}` is not on the trail", stem(&current)));
        return Ok(false);
    };

    match direction.target(forest, item) {
        Some(target) => {
            let identifier = match direction {
                Direction::Down => format!("{}.{extension}", target.link),
                _ => target.link.clone(),
            };
            host.visit_document(&identifier)?;
            Ok(true)
        }
        None => {
            host.message(&format!("No {} document", direction.name()));
            Ok(false)
        }
    }
}
