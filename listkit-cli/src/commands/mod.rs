//! CLI command implementations

use crate::config::CliConfig;
use crate::output::Transformed;
use anyhow::Result;
use clap::Subcommand;

pub mod chunk;
pub mod contains;
pub mod dedup;
pub mod filter;
pub mod strip;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remove repeated items, keeping first occurrences
    Dedup(dedup::DedupArgs),

    /// Keep or drop items matching glob or regex patterns
    Filter(filter::FilterArgs),

    /// Keep or drop items containing a literal substring
    Contains(contains::ContainsArgs),

    /// Trim characters from the ends of each item
    Strip(strip::StripArgs),

    /// Split items into fixed-size chunks
    Chunk(chunk::ChunkArgs),

    /// List available options
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available pattern syntaxes
    Syntaxes,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Names and descriptions to print
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ListCommands::Syntaxes => &[
                ("glob", "Shell-style wildcards: *, ?, [abc], [!abc]"),
                ("regex", "Regular expressions matched against the whole item"),
            ],
            ListCommands::Formats => &[
                (
                    "text",
                    "One item per line, chunks separated by a blank line \
                     (ambiguous when items are empty; use json)",
                ),
                ("json", "JSON array of items, or array of arrays for chunks"),
                ("markdown", "Numbered list with a totals footer"),
            ],
        }
    }
}

impl Commands {
    /// Apply a transforming command to the input items
    ///
    /// Returns `None` for commands that do not read input.
    pub fn transform(&self, items: &[String], config: &CliConfig) -> Option<Result<Transformed>> {
        match self {
            Commands::Dedup(args) => Some(args.execute(items)),
            Commands::Filter(args) => Some(args.execute(items, config)),
            Commands::Contains(args) => Some(args.execute(items)),
            Commands::Strip(args) => Some(args.execute(items, config)),
            Commands::Chunk(args) => Some(args.execute(items, config)),
            Commands::List { .. } => None,
        }
    }
}
