//! Chunk command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::Transformed;
use anyhow::{Context, Result};
use clap::Args;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Maximum number of items per chunk (default: from config)
    #[arg(short, long, value_name = "N")]
    pub size: Option<usize>,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self, items: &[String], config: &CliConfig) -> Result<Transformed> {
        let size = self
            .size
            .or(config.chunk.default_size)
            .ok_or_else(|| CliError::MissingArgument("--size".to_string()))?;

        let chunks = listkit_core::chunk(items, size).context("Chunking failed")?;

        log::info!(
            "Split {} item(s) into {} chunk(s) of up to {}",
            items.len(),
            chunks.len(),
            size
        );
        Ok(Transformed::Chunks(chunks))
    }
}
