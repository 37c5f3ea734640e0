//! Contains command implementation

use crate::output::Transformed;
use anyhow::Result;
use clap::Args;

/// Arguments for the contains command
#[derive(Debug, Args)]
pub struct ContainsArgs {
    /// Literal substring to look for
    #[arg(value_name = "NEEDLE")]
    pub needle: String,

    /// Drop items containing the substring instead of keeping them
    #[arg(short = 'x', long)]
    pub exclude: bool,
}

impl ContainsArgs {
    /// Execute the contains command
    pub fn execute(&self, items: &[String]) -> Result<Transformed> {
        let kept = if self.exclude {
            listkit_core::remove_containing(items, &self.needle)
        } else {
            listkit_core::filter_contains(items, &self.needle)
        };

        log::info!("Kept {} of {} item(s)", kept.len(), items.len());
        Ok(Transformed::Items(kept))
    }
}
