//! Error types for sheet assembly.

use std::path::PathBuf;

use thiserror::Error;

use crate::sheet::loader::SourceImage;

/// Errors that can occur while assembling a sprite sheet.
///
/// Every variant is terminal for the invocation: the pipeline performs no
/// retries and recovers nothing locally.
#[derive(Debug, Error)]
pub enum SheetError {
    /// A source file could not be opened for reading.
    #[error("cannot read source '{path}': {source}")]
    SourceUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A source file's content is not a decodable image.
    #[error("cannot decode source '{path}': {source}")]
    SourceUndecodable {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The configured column count is below 1.
    #[error("invalid column count {0}: must be at least 1")]
    InvalidColumnCount(u32),

    /// The output file could not be created.
    #[error("cannot write destination '{path}': {source}")]
    DestinationUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The composited canvas could not be encoded.
    #[error("failed to encode sprite sheet: {0}")]
    EncodeFailure(image::ImageError),
}

/// A load failure together with the images loaded before it.
///
/// The loader stops at the first failing source, but the partial set is
/// preserved so callers and tests can inspect exactly how far it got.
#[derive(Debug)]
pub struct LoadError {
    loaded: Vec<SourceImage>,
    error: SheetError,
}

impl LoadError {
    pub(crate) fn new(loaded: Vec<SourceImage>, error: SheetError) -> Self {
        Self { loaded, error }
    }

    /// Images that were successfully loaded before the failure, in input
    /// order.
    pub fn loaded(&self) -> &[SourceImage] {
        &self.loaded
    }

    /// The underlying failure.
    pub fn error(&self) -> &SheetError {
        &self.error
    }

    /// Split into the partial set and the underlying failure.
    pub fn into_parts(self) -> (Vec<SourceImage>, SheetError) {
        (self.loaded, self.error)
    }

    /// Discard the partial set, keeping only the failure.
    pub fn into_error(self) -> SheetError {
        self.error
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
