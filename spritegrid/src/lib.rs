//! SpriteGrid - sprite sheet assembly for games and icon sets
//!
//! This library combines many individually stored raster images into a single
//! grid-layout "sprite sheet" image. Every input image gets one fixed-size
//! cell; the cell size is the per-axis maximum over all inputs, and each
//! image is centered within its cell.

pub mod sheet;
pub mod telemetry;

pub use sheet::{
    composite, load_images, max_cell_size, Dimensions, GridShape, LoadError, LoadProgress,
    NullProgress, SheetConfig, SheetError, SheetSummary, SourceImage,
};

/// Library version from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
