//! CLI error types.

use std::fmt;

use spritegrid::SheetError;

/// Errors reported by the CLI before exiting non-zero.
#[derive(Debug)]
pub enum CliError {
    /// Invalid command-line configuration.
    Config(String),

    /// Sheet assembly or output writing failed.
    Sheet(SheetError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Sheet(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(_) => None,
            CliError::Sheet(e) => Some(e),
        }
    }
}

impl From<SheetError> for CliError {
    fn from(e: SheetError) -> Self {
        CliError::Sheet(e)
    }
}
