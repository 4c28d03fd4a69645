//! Source image loading.
//!
//! Loads each source path in input order, fails fast on the first
//! unreadable or undecodable file, and hands back whatever was loaded up to
//! that point inside the error. Each file is opened, decoded, and closed
//! within its own iteration, so at most one file handle is held regardless
//! of how long the input list is.

use std::path::{Path, PathBuf};

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::sheet::error::{LoadError, SheetError};
use crate::sheet::geometry::Dimensions;

/// One successfully loaded source image.
///
/// Order of appearance in the loaded set determines grid placement index.
/// `size` always equals `pixels.dimensions()`.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Path the image was loaded from, retained for diagnostics.
    pub path: PathBuf,

    /// Decoded pixel data, normalized to RGBA8.
    pub pixels: RgbaImage,

    /// The image's own dimensions.
    pub size: Dimensions,
}

/// Observer for per-image load progress.
///
/// The loader raises an event as each source starts and finishes loading so
/// interactive callers can render progress. Implementations must not fail;
/// progress is purely observational.
///
/// # Implementors
///
/// - [`NullProgress`] - no-op, for non-interactive callers and tests
pub trait LoadProgress {
    /// Called just before a source is opened.
    fn started(&self, path: &Path);

    /// Called after a source decoded successfully.
    fn loaded(&self, path: &Path, size: Dimensions);
}

/// No-op progress observer.
pub struct NullProgress;

impl LoadProgress for NullProgress {
    fn started(&self, _path: &Path) {}
    fn loaded(&self, _path: &Path, _size: Dimensions) {}
}

/// Load every source path, in order, failing fast on the first error.
///
/// On failure the returned [`LoadError`] carries the images loaded before
/// the failing path; no partial record is ever appended for the failing
/// path itself. Format detection is content-based, not extension-based.
pub fn load_images(
    paths: &[PathBuf],
    progress: &dyn LoadProgress,
) -> Result<Vec<SourceImage>, LoadError> {
    let mut images = Vec::with_capacity(paths.len());

    for path in paths {
        progress.started(path);

        match load_one(path) {
            Ok(image) => {
                debug!(path = %path.display(), size = %image.size, "loaded source image");
                progress.loaded(path, image.size);
                images.push(image);
            }
            Err(error) => return Err(LoadError::new(images, error)),
        }
    }

    Ok(images)
}

/// Open, sniff, and decode a single source. The file handle is dropped
/// before this returns.
fn load_one(path: &Path) -> Result<SourceImage, SheetError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| SheetError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let decoded = reader
        .decode()
        .map_err(|source| SheetError::SourceUndecodable {
            path: path.to_path_buf(),
            source,
        })?;

    let pixels = decoded.to_rgba8();
    let (width, height) = pixels.dimensions();

    Ok(SourceImage {
        path: path.to_path_buf(),
        pixels,
        size: Dimensions::new(width, height),
    })
}
