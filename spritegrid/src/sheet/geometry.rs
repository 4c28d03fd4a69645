//! Grid geometry: cell sizing, grid shape, and per-image placement.
//!
//! All layout arithmetic for the sheet lives here as pure functions over
//! plain value types, so the placement invariants can be tested without
//! touching pixel data.

use crate::sheet::loader::SourceImage;

/// A width/height pair in pixels.
///
/// Used both for an individual image's size and for the uniform cell size
/// derived from a whole image set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Create a new dimensions value.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether `self` fits within `other` on both axes.
    pub fn fits_within(&self, other: Dimensions) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// Grid geometry for a sheet: a configured column count and the row count
/// derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub columns: u32,
    pub rows: u32,
}

impl GridShape {
    /// Create a grid shape directly.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Derive the grid shape for `count` images laid out across `columns`.
    ///
    /// `rows = ceil(count / columns)`; an empty set yields zero rows.
    /// Callers must ensure `columns >= 1`.
    pub fn for_count(count: usize, columns: u32) -> Self {
        debug_assert!(columns >= 1, "column count must be at least 1");
        let rows = (count as u32).div_ceil(columns);
        Self { columns, rows }
    }

    /// Canvas dimensions for this grid at the given cell size.
    pub fn canvas_size(&self, cell: Dimensions) -> Dimensions {
        Dimensions::new(cell.width * self.columns, cell.height * self.rows)
    }
}

/// Where one image lands on the canvas: its cell coordinates and the
/// top-left pixel origin of the (centered) image within that cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
}

impl Placement {
    /// Compute the placement for the image at zero-based sequence index
    /// `index`, sized `image`, in a grid of `columns` cells of size `cell`.
    ///
    /// The image is centered in its cell with integer (floor) division, so
    /// an odd size difference shifts it one pixel toward the cell's
    /// top-left. Requires `image` to fit within `cell`, which holds by
    /// construction when `cell` came from [`max_cell_size`] over the same
    /// set.
    pub fn for_index(index: usize, image: Dimensions, cell: Dimensions, columns: u32) -> Self {
        debug_assert!(columns >= 1, "column count must be at least 1");
        debug_assert!(
            image.fits_within(cell),
            "image {} exceeds cell {}",
            image,
            cell
        );

        let column = index as u32 % columns;
        let row = index as u32 / columns;

        let offset_x = (cell.width - image.width) / 2;
        let offset_y = (cell.height - image.height) / 2;

        Self {
            column,
            row,
            x: column * cell.width + offset_x,
            y: row * cell.height + offset_y,
        }
    }
}

/// Component-wise maximum of all image sizes in the set.
///
/// The two maxima are independent: the widest image need not be the tallest.
/// Returns `(0, 0)` for an empty set.
pub fn max_cell_size(images: &[SourceImage]) -> Dimensions {
    images.iter().fold(Dimensions::default(), |max, img| {
        Dimensions::new(
            max.width.max(img.size.width),
            max.height.max(img.size.height),
        )
    })
}
