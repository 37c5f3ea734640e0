//! Strip command implementation

use crate::config::CliConfig;
use crate::output::Transformed;
use anyhow::Result;
use clap::Args;

/// Arguments for the strip command
#[derive(Debug, Args)]
pub struct StripArgs {
    /// Set of characters to strip (default: from config, else whitespace)
    #[arg(long, value_name = "CHARS")]
    pub chars: Option<String>,

    /// Which ends of each item to strip
    #[arg(long, value_enum, default_value = "both")]
    pub side: StripSide,

    /// Strip whitespace and one pair of surrounding quotes instead
    #[arg(long, conflicts_with_all = ["chars", "side"])]
    pub quotes: bool,
}

/// Ends of an item to strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StripSide {
    /// Leading and trailing
    Both,
    /// Leading only
    Leading,
    /// Trailing only
    Trailing,
}

impl StripArgs {
    /// Execute the strip command
    pub fn execute(&self, items: &[String], config: &CliConfig) -> Result<Transformed> {
        if self.quotes {
            return Ok(Transformed::Items(listkit_core::strip_quotes(items)));
        }

        let chars = self
            .chars
            .as_deref()
            .or(config.strip.default_chars.as_deref());
        log::debug!("Stripping {:?} from {:?} end(s)", chars, self.side);

        let stripped = match self.side {
            StripSide::Both => listkit_core::strip_items(items, chars),
            StripSide::Leading => listkit_core::lstrip_items(items, chars),
            StripSide::Trailing => listkit_core::rstrip_items(items, chars),
        };

        Ok(Transformed::Items(stripped))
    }
}
