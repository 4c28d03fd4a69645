//! Integration tests for the full sheet assembly pipeline.
//!
//! These tests verify the complete flow against real PNG files on disk:
//! - load → max cell size → composite → encode
//! - fail-fast loading with partial results
//! - degenerate empty-input run
//!
//! Run with: `cargo test --test sheet_pipeline_integration`

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use spritegrid::sheet::{self, NullProgress, SheetConfig, SheetError};
use spritegrid::{load_images, max_cell_size, Dimensions};

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a solid-color PNG of the given size and return its path.
fn write_sprite(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(&path)
        .expect("failed to write test sprite");
    path
}

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

// ============================================================================
// Integration Tests
// ============================================================================

/// The four-image reference layout: heterogeneous sizes, two columns.
#[test]
fn test_full_pipeline_four_images_two_columns() {
    let dir = tempfile::tempdir().unwrap();
    let sources = vec![
        write_sprite(dir.path(), "s0.png", 10, 10, RED),
        write_sprite(dir.path(), "s1.png", 20, 10, GREEN),
        write_sprite(dir.path(), "s2.png", 10, 20, BLUE),
        write_sprite(dir.path(), "s3.png", 20, 20, WHITE),
    ];
    let out = dir.path().join("sheet.png");

    let config = SheetConfig::new(sources).with_columns(2).with_output(&out);
    let summary = sheet::run(&config, &NullProgress).unwrap();

    assert_eq!(summary.cell, Dimensions::new(20, 20));
    assert_eq!(summary.grid.rows, 2);
    assert_eq!(summary.canvas, Dimensions::new(40, 40));

    // Re-read the encoded sheet and spot-check the centered origins:
    // (5,5), (20,5), (5,20), (20,20).
    let sheet = image::open(&out).unwrap().to_rgba8();
    assert_eq!(sheet.dimensions(), (40, 40));
    assert_eq!(sheet.get_pixel(5, 5).0, RED);
    assert_eq!(sheet.get_pixel(20, 5).0, GREEN);
    assert_eq!(sheet.get_pixel(5, 20).0, BLUE);
    assert_eq!(sheet.get_pixel(20, 20).0, WHITE);
    // Padding around the centered 10x10 image stays transparent.
    assert_eq!(sheet.get_pixel(0, 0).0, CLEAR);
    assert_eq!(sheet.get_pixel(4, 4).0, CLEAR);
}

/// Running the same config twice produces byte-identical sheets.
#[test]
fn test_pipeline_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let sources = vec![
        write_sprite(dir.path(), "a.png", 9, 4, RED),
        write_sprite(dir.path(), "b.png", 4, 9, GREEN),
        write_sprite(dir.path(), "c.png", 6, 6, BLUE),
    ];

    let first = sheet::assemble(
        &SheetConfig::new(sources.clone()).with_columns(2),
        &NullProgress,
    )
    .unwrap();
    let second = sheet::assemble(&SheetConfig::new(sources).with_columns(2), &NullProgress).unwrap();

    assert_eq!(first.as_raw(), second.as_raw());
}

/// An empty source list degenerately succeeds with a zero-area sheet.
#[test]
fn test_empty_input_succeeds_with_zero_area_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.png");

    let config = SheetConfig::new(vec![]).with_output(&out);
    let summary = sheet::run(&config, &NullProgress).unwrap();

    assert_eq!(summary.image_count, 0);
    assert_eq!(summary.cell, Dimensions::new(0, 0));
    assert_eq!(summary.canvas, Dimensions::new(0, 0));
    assert!(out.exists());
}

/// The loader returns exactly the images before the failing one.
#[test]
fn test_loader_partial_failure_keeps_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let sources = vec![
        write_sprite(dir.path(), "ok1.png", 3, 3, RED),
        write_sprite(dir.path(), "ok2.png", 3, 3, GREEN),
        dir.path().join("missing.png"),
        write_sprite(dir.path(), "after.png", 3, 3, BLUE),
    ];

    let err = load_images(&sources, &NullProgress).unwrap_err();
    assert_eq!(err.loaded().len(), 2);
    assert_eq!(err.loaded()[0].path, sources[0]);
    assert_eq!(err.loaded()[1].path, sources[1]);
    assert!(matches!(err.error(), SheetError::SourceUnreadable { .. }));
}

/// Cell size maxima come from different images when no single image is
/// largest on both axes.
#[test]
fn test_cell_size_spans_two_images() {
    let dir = tempfile::tempdir().unwrap();
    let sources = vec![
        write_sprite(dir.path(), "wide.png", 30, 5, RED),
        write_sprite(dir.path(), "tall.png", 5, 40, GREEN),
    ];

    let images = load_images(&sources, &NullProgress).unwrap();
    assert_eq!(max_cell_size(&images), Dimensions::new(30, 40));
}

/// A single 7x7 image with three columns gives a 21x7 sheet with the image
/// at the origin.
#[test]
fn test_single_image_three_columns() {
    let dir = tempfile::tempdir().unwrap();
    let sources = vec![write_sprite(dir.path(), "only.png", 7, 7, WHITE)];
    let out = dir.path().join("single.png");

    let config = SheetConfig::new(sources).with_output(&out);
    let summary = sheet::run(&config, &NullProgress).unwrap();

    assert_eq!(summary.cell, Dimensions::new(7, 7));
    assert_eq!(summary.canvas, Dimensions::new(21, 7));

    let sheet = image::open(&out).unwrap().to_rgba8();
    assert_eq!(sheet.get_pixel(0, 0).0, WHITE);
    assert_eq!(sheet.get_pixel(6, 6).0, WHITE);
    assert_eq!(sheet.get_pixel(7, 0).0, CLEAR);
}
