//! Grid Renderer
//!
//! Turns a small pixel-art raster into an enlarged template. Four stages run
//! in order:
//! 1. Color cataloging - numbers mode only, labels every distinct color
//! 2. Canvas initialization - white raster with a cell grid
//! 3. Cell marking - a circle or a label per source pixel
//! 4. Legend composition - numbers mode only, swatch strip above the grid
//!
//! Whatever comes out is finally turned upright when it is wider than tall.

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::canvas::{self, CellAnchor, CellMarks};
use crate::catalog::{ColorCatalog, LegendOrder};
use crate::error::{Fill2PaintError, Result};
use crate::legend;

// ============================================================================
// SETTINGS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Filled circle in the pixel's color
    Circles,
    /// Catalog label in the grid color, plus a legend
    Numbers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub mode: Mode,
    /// Side of one cell in output pixels (default: 10)
    pub cell_size: u32,
    /// Grid line width (default: 1)
    pub cell_thickness: u32,
    /// Circle radius as a fraction of the cell size (default: 1/6)
    pub circle_ratio: f32,
    /// Gray level of grid lines and cell labels (default: 100)
    pub grid_gray: u8,
    /// Circle placement inside a cell (default: from_bottom)
    pub anchor: CellAnchor,
    /// Scale of the labels drawn inside cells (default: 1.0)
    pub label_font_scale: f32,
    /// Compose the legend strip in numbers mode (default: true)
    pub legend: bool,
    /// Swatch order in the legend (default: label)
    pub legend_order: LegendOrder,
    /// Side of one legend swatch (default: 50)
    pub swatch_width: u32,
    /// Scale of the labels drawn on swatches (default: 2.0)
    pub legend_font_scale: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            mode: Mode::Circles,
            cell_size: 10,
            cell_thickness: 1,
            circle_ratio: 1.0 / 6.0,
            grid_gray: 100,
            anchor: CellAnchor::FromBottom,
            label_font_scale: 1.0,
            legend: true,
            legend_order: LegendOrder::Label,
            swatch_width: 50,
            legend_font_scale: 2.0,
        }
    }
}

impl RenderSettings {
    pub fn circles(cell_size: u32) -> Self {
        Self {
            mode: Mode::Circles,
            cell_size,
            ..Self::default()
        }
    }

    pub fn numbers(cell_size: u32) -> Self {
        Self {
            mode: Mode::Numbers,
            cell_size,
            ..Self::default()
        }
    }

    /// Circles only, centered from the top edge, never a legend
    pub fn plain_circles(cell_size: u32) -> Self {
        Self {
            mode: Mode::Circles,
            cell_size,
            anchor: CellAnchor::FromTop,
            legend: false,
            ..Self::default()
        }
    }

    pub fn grid_color(&self) -> Rgb<u8> {
        Rgb([self.grid_gray; 3])
    }

    pub fn circle_radius(&self) -> u32 {
        (self.circle_ratio * self.cell_size as f32) as u32
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(Fill2PaintError::InvalidParameter("cell_size must be at least 1".to_string()));
        }
        if self.cell_thickness == 0 {
            return Err(Fill2PaintError::InvalidParameter(
                "cell_thickness must be at least 1".to_string(),
            ));
        }
        if !(self.circle_ratio > 0.0 && self.circle_ratio <= 1.0) {
            return Err(Fill2PaintError::InvalidParameter(format!(
                "circle_ratio must be in (0, 1], got {}",
                self.circle_ratio
            )));
        }
        if self.swatch_width == 0 {
            return Err(Fill2PaintError::InvalidParameter(
                "swatch_width must be at least 1".to_string(),
            ));
        }
        for (name, scale) in [
            ("label_font_scale", self.label_font_scale),
            ("legend_font_scale", self.legend_font_scale),
        ] {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(Fill2PaintError::InvalidParameter(format!(
                    "{} must be positive, got {}",
                    name, scale
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// RESULTS
// ============================================================================

/// Everything a render produced, not just the pixels
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: RgbImage,
    pub mode: Mode,
    pub source_size: (u32, u32),
    /// Marked canvas size before legend and rotation
    pub canvas_size: (u32, u32),
    pub rotated: bool,
    /// Present in numbers mode
    pub catalog: Option<ColorCatalog>,
    pub legend_order: LegendOrder,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntryReport {
    pub label: String,
    pub rgb: [u8; 3],
    pub hex: String,
    pub pixels: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub mode: Mode,
    pub source_size: (u32, u32),
    pub canvas_size: (u32, u32),
    pub output_size: (u32, u32),
    pub rotated: bool,
    pub colors: usize,
    pub legend: Vec<LegendEntryReport>,
}

impl RenderOutput {
    pub fn report(&self) -> RenderReport {
        let legend: Vec<LegendEntryReport> = self
            .catalog
            .iter()
            .flat_map(|catalog| catalog.entries(self.legend_order))
            .map(|entry| LegendEntryReport {
                label: entry.label.clone(),
                rgb: entry.color.0,
                hex: entry.color.hex(),
                pixels: entry.pixels,
            })
            .collect();

        RenderReport {
            mode: self.mode,
            source_size: self.source_size,
            canvas_size: self.canvas_size,
            output_size: self.image.dimensions(),
            rotated: self.rotated,
            colors: legend.len(),
            legend,
        }
    }
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// Render `source` into a grid template
pub fn render(source: &RgbImage, settings: &RenderSettings) -> Result<RgbImage> {
    render_detailed(source, settings).map(|output| output.image)
}

/// Render `source` and keep the catalog and layout details alongside the image
pub fn render_detailed(source: &RgbImage, settings: &RenderSettings) -> Result<RenderOutput> {
    let (cols, rows) = source.dimensions();
    if cols == 0 || rows == 0 {
        return Err(Fill2PaintError::EmptyImage { width: cols, height: rows });
    }
    settings.validate()?;
    if cols.checked_mul(settings.cell_size).is_none() || rows.checked_mul(settings.cell_size).is_none() {
        return Err(Fill2PaintError::InvalidParameter(format!(
            "{}x{} cells of {} pixels do not fit in an image",
            cols, rows, settings.cell_size
        )));
    }

    tracing::info!(cols, rows, mode = ?settings.mode, "rendering grid");

    // Step 1: Color cataloging (numbers mode)
    let catalog = match settings.mode {
        Mode::Numbers => {
            let catalog = ColorCatalog::from_image(source);
            tracing::info!(colors = catalog.len(), "color catalog built");
            Some(catalog)
        }
        Mode::Circles => None,
    };

    if let Some(catalog) = catalog.as_ref().filter(|_| settings.legend) {
        let strip_width = u32::try_from(catalog.len())
            .ok()
            .and_then(|n| n.checked_mul(settings.swatch_width));
        let total_height = (rows * settings.cell_size).checked_add(settings.swatch_width);
        if strip_width.is_none() || total_height.is_none() {
            return Err(Fill2PaintError::InvalidParameter(format!(
                "legend of {} swatches of {} pixels does not fit in an image",
                catalog.len(),
                settings.swatch_width
            )));
        }
    }

    // Step 2: Canvas with grid
    let mut canvas = canvas::init_canvas(cols, rows, settings);

    // Step 3: Cell markers
    let marks = match &catalog {
        Some(catalog) => CellMarks::Labels(catalog),
        None => CellMarks::Circles,
    };
    canvas::mark_cells(&mut canvas, source, settings, marks);
    let canvas_size = canvas.dimensions();
    tracing::debug!(?canvas_size, "cells marked");

    // Step 4: Legend (numbers mode)
    let composed = match &catalog {
        Some(catalog) if settings.legend => {
            let strip = legend::build_legend(catalog, settings);
            tracing::debug!(strip_size = ?strip.dimensions(), "legend built");
            legend::attach_legend(&canvas, &strip)
        }
        _ => canvas,
    };

    let (image, rotated) = canvas::normalize_orientation(composed);
    if rotated {
        tracing::debug!(size = ?image.dimensions(), "rotated upright");
    }

    Ok(RenderOutput {
        image,
        mode: settings.mode,
        source_size: (cols, rows),
        canvas_size,
        rotated,
        catalog,
        legend_order: settings.legend_order,
    })
}

// ============================================================================
// TESTS
// ============================================================================
