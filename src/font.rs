//! Stroke Font
//!
//! Minimal vector font for catalog labels. Glyphs are polylines on a design
//! grid 4 units wide and 8 units tall, y pointing up from the baseline, and
//! are rasterized at any scale with a round brush.
//!
//! No TTF ships with the crate, so `imageproc::drawing::draw_text_mut` is not
//! an option. Strokes also make the outlined look cheap: draw the label once
//! thick in white, then thin in black over it.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, BresenhamLineIter};

/// Design units from one pen position to the next
const ADVANCE: f32 = 6.0;
/// Cap height in design units
const CAP_HEIGHT: f32 = 8.0;
/// Ink width in design units
const GLYPH_WIDTH: f32 = 4.0;

type Stroke = &'static [(i8, i8)];

const DIGITS: [&[Stroke]; 10] = [
    // 0
    &[&[(1, 0), (3, 0), (4, 1), (4, 7), (3, 8), (1, 8), (0, 7), (0, 1), (1, 0)]],
    // 1
    &[&[(1, 6), (2, 8), (2, 0)], &[(1, 0), (3, 0)]],
    // 2
    &[&[(0, 7), (1, 8), (3, 8), (4, 7), (4, 5), (0, 0), (4, 0)]],
    // 3
    &[
        &[(0, 7), (1, 8), (3, 8), (4, 7), (4, 5), (3, 4), (1, 4)],
        &[(3, 4), (4, 3), (4, 1), (3, 0), (1, 0), (0, 1)],
    ],
    // 4
    &[&[(3, 0), (3, 8), (0, 2), (4, 2)]],
    // 5
    &[&[(4, 8), (0, 8), (0, 4), (3, 4), (4, 3), (4, 1), (3, 0), (1, 0), (0, 1)]],
    // 6
    &[&[(4, 7), (3, 8), (1, 8), (0, 7), (0, 1), (1, 0), (3, 0), (4, 1), (4, 3), (3, 4), (0, 4)]],
    // 7
    &[&[(0, 8), (4, 8), (1, 0)]],
    // 8
    &[&[
        (1, 4), (0, 5), (0, 7), (1, 8), (3, 8), (4, 7), (4, 5), (3, 4),
        (1, 4), (0, 3), (0, 1), (1, 0), (3, 0), (4, 1), (4, 3), (3, 4),
    ]],
    // 9
    &[&[(0, 1), (1, 0), (3, 0), (4, 1), (4, 7), (3, 8), (1, 8), (0, 7), (0, 5), (1, 4), (4, 4)]],
];

fn glyph(c: char) -> Option<&'static [Stroke]> {
    c.to_digit(10).map(|d| DIGITS[d as usize])
}

/// Pixel extent `(width, height)` of `text` at `scale`, ignoring stroke thickness
pub fn text_size(text: &str, scale: f32) -> (u32, u32) {
    let n = text.chars().count();
    if n == 0 {
        return (0, 0);
    }
    let width = ((n - 1) as f32 * ADVANCE + GLYPH_WIDTH) * scale;
    let height = CAP_HEIGHT * scale;
    (width.round() as u32, height.round() as u32)
}

/// Draw `text` with its baseline starting at `origin` (bottom-left corner of the first glyph).
///
/// Characters without a glyph advance the pen but leave no ink.
/// Everything outside the image is clipped.
pub fn draw_text(
    img: &mut RgbImage,
    text: &str,
    origin: (i32, i32),
    scale: f32,
    thickness: u32,
    color: Rgb<u8>,
) {
    let (ox, oy) = origin;
    let to_pixel = |pen: f32, (ux, uy): (i8, i8)| -> (f32, f32) {
        (
            ox as f32 + ((pen + ux as f32) * scale).round(),
            oy as f32 - (uy as f32 * scale).round(),
        )
    };

    for (i, c) in text.chars().enumerate() {
        let Some(strokes) = glyph(c) else {
            continue;
        };
        let pen = i as f32 * ADVANCE;
        for stroke in strokes {
            for segment in stroke.windows(2) {
                let start = to_pixel(pen, segment[0]);
                let end = to_pixel(pen, segment[1]);
                draw_segment(img, start, end, thickness, color);
            }
        }
    }
}

fn draw_segment(img: &mut RgbImage, start: (f32, f32), end: (f32, f32), thickness: u32, color: Rgb<u8>) {
    let (width, height) = img.dimensions();
    let radius = (thickness / 2) as i32;

    for (x, y) in BresenhamLineIter::new(start, end) {
        if radius == 0 {
            if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
                img.put_pixel(x as u32, y as u32, color);
            }
        } else {
            draw_filled_circle_mut(img, (x, y), radius, color);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
