//! Sheet assembly configuration.
//!
//! All run settings live in an explicit [`SheetConfig`] passed into the
//! pipeline entry points; there is no process-wide mutable state.

use std::path::PathBuf;

use crate::sheet::error::SheetError;

/// Default column count for the output grid.
pub const DEFAULT_COLUMNS: u32 = 3;

/// Default output filename.
pub const DEFAULT_OUTPUT: &str = "out.png";

/// Configuration for one sheet assembly run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    /// Source image paths, in placement order.
    pub sources: Vec<PathBuf>,

    /// Number of grid columns. Must be at least 1.
    pub columns: u32,

    /// Where to write the composited sheet.
    pub output: PathBuf,
}

impl SheetConfig {
    /// Create a config for the given sources with default column count and
    /// output path.
    pub fn new(sources: Vec<PathBuf>) -> Self {
        Self {
            sources,
            columns: DEFAULT_COLUMNS,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Set the column count.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Check the config before any loading begins.
    pub fn validate(&self) -> Result<(), SheetError> {
        if self.columns < 1 {
            return Err(SheetError::InvalidColumnCount(self.columns));
        }
        Ok(())
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
