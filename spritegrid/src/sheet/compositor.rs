//! Tile compositing onto the destination canvas.

use image::{imageops, RgbaImage};
use tracing::trace;

use crate::sheet::geometry::{max_cell_size, Dimensions, GridShape, Placement};
use crate::sheet::loader::SourceImage;

/// Composite every image onto a single canvas, one cell per image.
///
/// The canvas is `cell.width * columns` wide and `cell.height * rows` tall
/// with `rows = ceil(images.len() / columns)`, initialized fully
/// transparent. Each image is copied into its cell centered, with overwrite
/// semantics (no blending) and without clipping or scaling. An empty set
/// yields a zero-area canvas.
///
/// Callers must have validated `columns >= 1` and derived `cell` from the
/// same image set (see [`max_cell_size`]); an image larger than `cell`
/// trips a debug assertion rather than silently bleeding into a neighbor
/// cell.
pub fn composite(images: &[SourceImage], cell: Dimensions, columns: u32) -> RgbaImage {
    debug_assert!(columns >= 1, "column count must be at least 1");
    debug_assert!(
        max_cell_size(images).fits_within(cell),
        "cell size smaller than an image in the set"
    );

    let grid = GridShape::for_count(images.len(), columns);
    let canvas_size = grid.canvas_size(cell);
    let mut canvas = RgbaImage::new(canvas_size.width, canvas_size.height);

    for (index, image) in images.iter().enumerate() {
        let placement = Placement::for_index(index, image.size, cell, columns);
        trace!(
            path = %image.path.display(),
            column = placement.column,
            row = placement.row,
            x = placement.x,
            y = placement.y,
            "placing image"
        );
        imageops::replace(
            &mut canvas,
            &image.pixels,
            i64::from(placement.x),
            i64::from(placement.y),
        );
    }

    canvas
}
