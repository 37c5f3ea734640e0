//! listkit CLI library
//!
//! This library provides the command-line interface for the listkit
//! list transformation utilities.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{exit_code, CliError, CliResult};

use anyhow::{Context, Result};
use clap::Parser;
use commands::Commands;
use config::CliConfig;
use output::{create_formatter, OutputFormat};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Transform lists of text items: deduplicate, filter, strip and chunk
#[derive(Debug, Parser)]
#[command(name = "listkit", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Input files or patterns, one item per line (default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", global = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "LISTKIT_CONFIG",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print the full error cause chain on failure
    #[arg(long, global = true)]
    pub traceback: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Run the parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    log::debug!("Arguments: {:?}", cli);

    let config = CliConfig::load(cli.config.as_deref())?;

    if let Commands::List { subcommand } = &cli.command {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for (name, description) in subcommand.entries() {
            writeln!(out, "{name:<10} {description}")?;
        }
        return Ok(());
    }

    let items = input::read_items(&cli.input, cli.quiet)?;
    log::info!("Read {} item(s)", items.len());

    let Some(result) = cli.command.transform(&items, &config) else {
        return Ok(());
    };
    let result = result?;
    log::info!("Produced {} item(s)", result.item_count());

    let format = cli.format.unwrap_or(config.output.default_format);
    let pretty_json = config.output.pretty_json;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut formatter = create_formatter(format, BufWriter::new(file), pretty_json);
            formatter.write(&result)?;
            formatter.finish()?;
            log::info!("Wrote {} output to {}", format.as_str(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut formatter = create_formatter(format, stdout.lock(), pretty_json);
            formatter.write(&result)?;
            formatter.finish()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::try_parse_from([
            "listkit", "chunk", "--size", "2", "-i", "a.txt", "-f", "json", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.input, vec!["a.txt".to_string()]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Chunk(commands::chunk::ChunkArgs { size: Some(2) })
        ));
    }

    #[test]
    fn test_filter_requires_pattern() {
        assert!(Cli::try_parse_from(["listkit", "filter"]).is_err());
    }

    #[test]
    fn test_negative_chunk_size_rejected() {
        assert!(Cli::try_parse_from(["listkit", "chunk", "--size", "-1"]).is_err());
    }

    #[test]
    fn test_quotes_conflicts_with_chars() {
        let result = Cli::try_parse_from(["listkit", "strip", "--quotes", "--chars", "x"]);
        assert!(result.is_err());
    }
}
