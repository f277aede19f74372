//! Canvas stages of the grid renderer
//!
//! - Canvas initialization: white raster scaled by the cell size, plus grid lines
//! - Cell marking: one filled circle or one catalog label per source pixel
//! - Orientation normalization: landscape results are turned upright

use image::{imageops, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::catalog::ColorCatalog;
use crate::font;
use crate::renderer::RenderSettings;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Label origin offset from the bottom-left corner of a cell
const LABEL_INSET: i32 = 2;

/// Where a circle sits inside its cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellAnchor {
    /// Center measured up from the bottom edge: `(row + 1) * size - size / 2`
    #[default]
    FromBottom,
    /// Center measured down from the top edge: `row * size + size / 2`
    FromTop,
}

impl CellAnchor {
    /// Pixel center of cell `(col, row)`
    pub fn center(self, col: u32, row: u32, cell_size: u32) -> (i32, i32) {
        let size = cell_size as i32;
        let x = col as i32 * size + size / 2;
        let y = match self {
            CellAnchor::FromBottom => (row as i32 + 1) * size - size / 2,
            CellAnchor::FromTop => row as i32 * size + size / 2,
        };
        (x, y)
    }
}

/// What to draw in each cell
#[derive(Debug, Clone, Copy)]
pub enum CellMarks<'a> {
    Circles,
    Labels(&'a ColorCatalog),
}

// ============================================================================
// CANVAS INITIALIZATION
// ============================================================================

/// Allocate a `cols x rows` cell canvas filled with white and draw the grid.
///
/// One horizontal line per row and one vertical line per column, each on the
/// top/left edge of its cell. Caller guarantees the scaled size fits in `u32`.
pub fn init_canvas(cols: u32, rows: u32, settings: &RenderSettings) -> RgbImage {
    let size = settings.cell_size;
    let (width, height) = (cols * size, rows * size);
    let mut canvas = RgbImage::from_pixel(width, height, WHITE);

    let color = settings.grid_color();
    let thickness = settings.cell_thickness;
    let offset = (thickness / 2) as i32;

    for row in 0..rows {
        let y = (row * size) as i32 - offset;
        draw_filled_rect_mut(&mut canvas, Rect::at(0, y).of_size(width, thickness), color);
    }
    for col in 0..cols {
        let x = (col * size) as i32 - offset;
        draw_filled_rect_mut(&mut canvas, Rect::at(x, 0).of_size(thickness, height), color);
    }

    canvas
}

// ============================================================================
// CELL MARKING
// ============================================================================

/// Draw one marker per source pixel onto a canvas from [`init_canvas`]
pub fn mark_cells(canvas: &mut RgbImage, source: &RgbImage, settings: &RenderSettings, marks: CellMarks) {
    let size = settings.cell_size;

    match marks {
        CellMarks::Circles => {
            let radius = settings.circle_radius() as i32;
            for (col, row, pixel) in source.enumerate_pixels() {
                let center = settings.anchor.center(col, row, size);
                draw_filled_circle_mut(canvas, center, radius, *pixel);
            }
        }
        CellMarks::Labels(catalog) => {
            let color = settings.grid_color();
            for (col, row, pixel) in source.enumerate_pixels() {
                let Some(label) = catalog.label(pixel.into()) else {
                    tracing::warn!(col, row, "pixel color missing from catalog, cell left blank");
                    continue;
                };
                let left = (col * size) as i32;
                let down = ((row + 1) * size) as i32;
                let origin = (left + LABEL_INSET, down - LABEL_INSET);
                font::draw_text(canvas, label, origin, settings.label_font_scale, 1, color);
            }
        }
    }
}

// ============================================================================
// ORIENTATION
// ============================================================================

/// Turn a landscape raster upright (transpose, then flip vertically).
///
/// Returns the raster and whether it was rotated.
pub fn normalize_orientation(img: RgbImage) -> (RgbImage, bool) {
    let (width, height) = img.dimensions();
    if width > height {
        (imageops::rotate270(&img), true)
    } else {
        (img, false)
    }
}

// ============================================================================
// TESTS
// ============================================================================
