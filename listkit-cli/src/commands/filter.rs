//! Filter command implementation

use crate::config::CliConfig;
use crate::output::Transformed;
use anyhow::{Context, Result};
use clap::Args;
use listkit_core::{FilterMode, PatternSyntax};

/// Arguments for the filter command
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Pattern to match against whole items (repeatable; any match counts)
    #[arg(short, long = "pattern", value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Drop matching items instead of keeping them
    #[arg(short = 'x', long)]
    pub exclude: bool,

    /// Pattern syntax (default: from config, else glob)
    #[arg(short, long, value_enum)]
    pub syntax: Option<SyntaxArg>,
}

/// Pattern syntax as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SyntaxArg {
    /// Shell-style wildcards
    Glob,
    /// Regular expressions
    Regex,
}

impl From<SyntaxArg> for PatternSyntax {
    fn from(arg: SyntaxArg) -> Self {
        match arg {
            SyntaxArg::Glob => PatternSyntax::Glob,
            SyntaxArg::Regex => PatternSyntax::Regex,
        }
    }
}

impl FilterArgs {
    /// Filter mode selected by the flags
    pub fn mode(&self) -> FilterMode {
        if self.exclude {
            FilterMode::Exclude
        } else {
            FilterMode::Include
        }
    }

    /// Execute the filter command
    pub fn execute(&self, items: &[String], config: &CliConfig) -> Result<Transformed> {
        let syntax = self
            .syntax
            .map(PatternSyntax::from)
            .unwrap_or(config.filter.default_syntax);
        let mode = self.mode();

        log::debug!(
            "Filtering {} item(s) with {} {} pattern(s), mode {:?}",
            items.len(),
            self.patterns.len(),
            syntax.as_str(),
            mode
        );

        let kept = listkit_core::filter_by_pattern(items, &self.patterns, mode, syntax)
            .context("Filtering failed")?;

        log::info!("Kept {} of {} item(s)", kept.len(), items.len());
        Ok(Transformed::Items(kept))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn args(patterns: &[&str], exclude: bool, syntax: Option<SyntaxArg>) -> FilterArgs {
        FilterArgs {
            patterns: items(patterns),
            exclude,
            syntax,
        }
    }

    #[test]
    fn test_include_glob() {
        let result = args(&["*.txt"], false, None)
            .execute(&items(&["a.txt", "b.png"]), &CliConfig::default())
            .unwrap();
        assert_eq!(result, Transformed::Items(items(&["a.txt"])));
    }

    #[test]
    fn test_exclude() {
        let result = args(&["*.txt"], true, Some(SyntaxArg::Glob))
            .execute(&items(&["a.txt", "b.png"]), &CliConfig::default())
            .unwrap();
        assert_eq!(result, Transformed::Items(items(&["b.png"])));
    }

    #[test]
    fn test_syntax_falls_back_to_config() {
        let mut config = CliConfig::default();
        config.filter.default_syntax = PatternSyntax::Regex;

        let result = args(&[r"a\d"], false, None)
            .execute(&items(&["a1", "ab"]), &config)
            .unwrap();
        assert_eq!(result, Transformed::Items(items(&["a1"])));
    }

    #[test]
    fn test_flag_overrides_config() {
        let mut config = CliConfig::default();
        config.filter.default_syntax = PatternSyntax::Regex;

        let result = args(&["a?"], false, Some(SyntaxArg::Glob))
            .execute(&items(&["a1", "abc"]), &config)
            .unwrap();
        assert_eq!(result, Transformed::Items(items(&["a1"])));
    }

    #[test]
    fn test_invalid_regex_keeps_core_error() {
        let err = args(&["("], false, Some(SyntaxArg::Regex))
            .execute(&items(&["a"]), &CliConfig::default())
            .unwrap_err();

        let core = err.downcast_ref::<listkit_core::Error>();
        assert!(matches!(core, Some(listkit_core::Error::Pattern { .. })));
    }
}
