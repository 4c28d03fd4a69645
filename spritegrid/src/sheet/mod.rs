//! Sprite sheet assembly pipeline.
//!
//! The pipeline is a single-threaded, single-shot sequence:
//!
//! ```text
//! load_images ─────► max_cell_size ─────► composite ─────► write_png
//! (fail fast)       (pure, total)        (grid layout)    (PNG encode)
//! ```
//!
//! Each stage lives in its own submodule; [`run`] wires them together for
//! callers that just want a sheet written to disk.
//!
//! # Example
//!
//! ```no_run
//! use spritegrid::sheet::{self, NullProgress, SheetConfig};
//!
//! let config = SheetConfig::new(vec!["a.png".into(), "b.png".into()])
//!     .with_columns(4)
//!     .with_output("sheet.png");
//! let summary = sheet::run(&config, &NullProgress)?;
//! println!("wrote {}", summary.output.display());
//! # Ok::<(), spritegrid::SheetError>(())
//! ```

mod compositor;
mod config;
mod error;
mod geometry;
mod loader;

pub use compositor::composite;
pub use config::SheetConfig;
pub use error::{LoadError, SheetError};
pub use geometry::{max_cell_size, Dimensions, GridShape, Placement};
pub use loader::{load_images, LoadProgress, NullProgress, SourceImage};

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tracing::info;

/// Outcome of a completed pipeline run, for caller-side reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    /// Number of source images placed on the sheet.
    pub image_count: usize,

    /// Uniform cell size used for every image.
    pub cell: Dimensions,

    /// Grid geometry derived from the image count and column setting.
    pub grid: GridShape,

    /// Final canvas dimensions.
    pub canvas: Dimensions,

    /// Where the sheet was written.
    pub output: PathBuf,
}

/// Load all sources and composite them into a single canvas.
///
/// Validates the configuration first, so an invalid column count is rejected
/// before any file is opened. A load failure is terminal: the partially
/// loaded set is discarded here (it remains available to callers that invoke
/// [`load_images`] directly and inspect the [`LoadError`]).
pub fn assemble(
    config: &SheetConfig,
    progress: &dyn LoadProgress,
) -> Result<RgbaImage, SheetError> {
    let (canvas, _, _) = assemble_parts(config, progress)?;
    Ok(canvas)
}

/// Shared load → measure → composite sequence behind [`assemble`] and [`run`].
fn assemble_parts(
    config: &SheetConfig,
    progress: &dyn LoadProgress,
) -> Result<(RgbaImage, Dimensions, usize), SheetError> {
    config.validate()?;

    let images = load_images(&config.sources, progress).map_err(LoadError::into_error)?;

    let cell = max_cell_size(&images);
    info!(
        width = cell.width,
        height = cell.height,
        count = images.len(),
        "computed maximum cell size"
    );

    let canvas = composite(&images, cell, config.columns);
    Ok((canvas, cell, images.len()))
}

/// Encode a composited canvas as PNG at `path`.
///
/// Invoked exactly once per pipeline run, after compositing. A zero-area
/// canvas (the empty-input degenerate case) creates the destination file
/// but skips the encoder, since PNG cannot represent zero dimensions.
pub fn write_png(canvas: &RgbaImage, path: &Path) -> Result<(), SheetError> {
    let file = File::create(path).map_err(|source| SheetError::DestinationUnwritable {
        path: path.to_path_buf(),
        source,
    })?;

    if canvas.width() == 0 || canvas.height() == 0 {
        return Ok(());
    }

    let mut writer = BufWriter::new(file);
    canvas
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(SheetError::EncodeFailure)
}

/// Run the full pipeline: load, composite, and write the sheet.
pub fn run(config: &SheetConfig, progress: &dyn LoadProgress) -> Result<SheetSummary, SheetError> {
    let (canvas, cell, image_count) = assemble_parts(config, progress)?;

    let grid = GridShape::for_count(image_count, config.columns);
    let canvas_size = Dimensions::new(canvas.width(), canvas.height());

    write_png(&canvas, &config.output)?;
    info!(output = %config.output.display(), "sprite sheet written");

    Ok(SheetSummary {
        image_count,
        cell,
        grid,
        canvas: canvas_size,
        output: config.output.clone(),
    })
}
