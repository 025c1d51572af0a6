//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::commands::{COMMANDS, Direction};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reading-order trails for tola sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: tola.toml)
    #[arg(short = 'C', long, default_value = "tola.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fill `<!-- trail:nav -->` and `<!-- trail:listing -->` markers in built pages
    Build,

    /// Print the navigation bar of a document
    Nav {
        /// document path or name
        document: String,
    },

    /// Print the trail listing of a document (if it has one)
    Listing {
        /// document path or name
        document: String,
    },

    /// Open the next/previous/up/down document
    Visit {
        /// where to go (`next` or `visit-next`, ...)
        #[arg(value_parser = parse_direction)]
        direction: Direction,

        /// document path or name to start from
        document: String,
    },

    /// Report duplicate and dangling trail links
    Check,

    /// Print the trail as an outline
    Tree,
}

/// Look a direction up in the command table, with or without `visit-`.
fn parse_direction(value: &str) -> Result<Direction, String> {
    let command = if value.starts_with("visit-") {
        value.to_owned()
    } else {
        format!("visit-{value}")
    };

    Direction::from_command(&command).ok_or_else(|| {
        let names: Vec<_> = COMMANDS.iter().map(|(name, _)| *name).collect();
        format!("expected one of: {}", names.join(", "))
    })
}
