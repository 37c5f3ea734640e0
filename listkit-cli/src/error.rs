//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// A required argument was supplied neither on the command line nor in config
    MissingArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MissingArgument(name) => write!(f, "Missing argument: {name}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Process exit code for a successful run
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit code for I/O, configuration and other failures
pub const EXIT_FAILURE: u8 = 1;
/// Process exit code for invalid arguments (bad chunk size, no patterns)
pub const EXIT_VALIDATION: u8 = 2;
/// Process exit code for patterns that fail to compile
pub const EXIT_PATTERN: u8 = 3;

/// Map an error to the process exit code
///
/// The whole cause chain is searched, so core errors keep their code even
/// after `anyhow` context has been attached.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    let core = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<listkit_core::Error>());

    match core {
        Some(listkit_core::Error::Validation(_)) => EXIT_VALIDATION,
        Some(listkit_core::Error::Pattern { .. }) => EXIT_PATTERN,
        None => match error.downcast_ref::<CliError>() {
            Some(CliError::MissingArgument(_)) => EXIT_VALIDATION,
            _ => EXIT_FAILURE,
        },
    }
}
