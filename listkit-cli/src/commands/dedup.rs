//! Dedup command implementation

use crate::output::Transformed;
use anyhow::Result;
use clap::Args;

/// Arguments for the dedup command
#[derive(Debug, Args)]
pub struct DedupArgs {
    /// Lowercase items before comparing (output is lowercased)
    #[arg(long)]
    pub ignore_case: bool,
}

impl DedupArgs {
    /// Execute the dedup command
    pub fn execute(&self, items: &[String]) -> Result<Transformed> {
        let unique = if self.ignore_case {
            listkit_core::deduplicate_lowercase(items)
        } else {
            listkit_core::deduplicate(items)
        };

        log::info!("Removed {} duplicate item(s)", items.len() - unique.len());
        Ok(Transformed::Items(unique))
    }
}
