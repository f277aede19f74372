//! Legend strip for numeric templates: one colored swatch per catalog entry,
//! labelled with the number used in the grid.

use image::{imageops, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::canvas::{BLACK, WHITE};
use crate::catalog::ColorCatalog;
use crate::font;
use crate::renderer::RenderSettings;

/// Build the swatch strip, `len * swatch_width` wide and `swatch_width` tall
pub fn build_legend(catalog: &ColorCatalog, settings: &RenderSettings) -> RgbImage {
    let w = settings.swatch_width;
    let entries = catalog.entries(settings.legend_order);
    let mut strip = RgbImage::from_pixel(entries.len() as u32 * w, w, WHITE);

    for (i, entry) in entries.iter().enumerate() {
        let left = i as u32 * w;
        draw_filled_rect_mut(&mut strip, Rect::at(left as i32, 0).of_size(w, w), entry.color.to_rgb());

        // White halo first, then the black label on top of it
        let origin = ((left + w / 3) as i32, (2 * u64::from(w) / 3) as i32);
        let scale = fit_scale(&entry.label, settings.legend_font_scale, w - w / 3);
        font::draw_text(&mut strip, &entry.label, origin, scale, 2, WHITE);
        font::draw_text(&mut strip, &entry.label, origin, scale, 1, BLACK);
    }

    strip
}

/// Largest scale up to `scale` at which `label` ends before `room` pixels,
/// leaving a one pixel gap to the next swatch
fn fit_scale(label: &str, scale: f32, room: u32) -> f32 {
    let (unit_width, _) = font::text_size(label, 1.0);
    let room = room.saturating_sub(1);
    if unit_width == 0 || room == 0 {
        return scale;
    }
    scale.min(room as f32 / unit_width as f32)
}

/// Stack `legend` on top of `canvas`, padding the narrower one with white
pub fn attach_legend(canvas: &RgbImage, legend: &RgbImage) -> RgbImage {
    let width = canvas.width().max(legend.width());
    let height = canvas.height() + legend.height();
    let mut out = RgbImage::from_pixel(width, height, WHITE);

    imageops::replace(&mut out, legend, 0, 0);
    imageops::replace(&mut out, canvas, 0, legend.height() as i64);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LegendOrder;
    use image::Rgb;

    fn catalog_of(colors: &[[u8; 3]]) -> ColorCatalog {
        let mut img = RgbImage::new(colors.len() as u32, 1);
        for (i, c) in colors.iter().enumerate() {
            img.put_pixel(i as u32, 0, Rgb(*c));
        }
        ColorCatalog::from_image(&img)
    }

    #[test]
    fn test_legend_dimensions() {
        let catalog = catalog_of(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let strip = build_legend(&catalog, &RenderSettings::default());
        assert_eq!(strip.dimensions(), (150, 50));

        let settings = RenderSettings {
            swatch_width: 20,
            ..RenderSettings::default()
        };
        assert_eq!(build_legend(&catalog, &settings).dimensions(), (60, 20));
    }

    #[test]
    fn test_swatches_follow_order() {
        let catalog = catalog_of(&[[200, 0, 0], [10, 0, 0]]);

        let by_label = build_legend(&catalog, &RenderSettings::default());
        assert_eq!(*by_label.get_pixel(2, 2), Rgb([200, 0, 0]));
        assert_eq!(*by_label.get_pixel(52, 2), Rgb([10, 0, 0]));

        let settings = RenderSettings {
            legend_order: LegendOrder::Color,
            ..RenderSettings::default()
        };
        let by_color = build_legend(&catalog, &settings);
        assert_eq!(*by_color.get_pixel(2, 2), Rgb([10, 0, 0]));
        assert_eq!(*by_color.get_pixel(52, 2), Rgb([200, 0, 0]));
    }

    #[test]
    fn test_label_is_outlined() {
        let catalog = catalog_of(&[[255, 0, 0]]);
        let strip = build_legend(&catalog, &RenderSettings::default());

        assert!(strip.pixels().any(|p| *p == BLACK));
        assert!(strip.pixels().any(|p| *p == WHITE));
        assert!(strip.pixels().any(|p| *p == Rgb([255, 0, 0])));
    }

    #[test]
    fn test_short_labels_keep_scale() {
        assert_eq!(fit_scale("10", 2.0, 34), 2.0);
        assert_eq!(fit_scale("100", 2.0, 34), 2.0);
        assert!(fit_scale("1000", 2.0, 34) < 2.0);
    }

    #[test]
    fn test_long_label_stays_in_swatch() {
        let colors: Vec<[u8; 3]> = (0..12).map(|i| [50 + i as u8 * 10, 100, 100]).collect();
        let catalog = catalog_of(&colors);
        let settings = RenderSettings {
            swatch_width: 20,
            ..RenderSettings::default()
        };
        let strip = build_legend(&catalog, &settings);

        // "10" sits in swatch 9, swatch 10 starts at x = 200 and its own
        // label starts at x = 206
        let has_ink = (200..205).any(|x| (0..20).any(|y| *strip.get_pixel(x, y) == BLACK));
        assert!(!has_ink);
        assert!((180..200).any(|x| (0..20).any(|y| *strip.get_pixel(x, y) == BLACK)));
    }

    #[test]
    fn test_attach_pads_narrow_canvas() {
        let canvas = RgbImage::from_pixel(20, 10, Rgb([1, 1, 1]));
        let legend = RgbImage::from_pixel(100, 50, Rgb([2, 2, 2]));
        let out = attach_legend(&canvas, &legend);

        assert_eq!(out.dimensions(), (100, 60));
        assert_eq!(*out.get_pixel(99, 0), Rgb([2, 2, 2]));
        assert_eq!(*out.get_pixel(0, 50), Rgb([1, 1, 1]));
        assert_eq!(*out.get_pixel(19, 59), Rgb([1, 1, 1]));
        assert_eq!(*out.get_pixel(20, 59), WHITE);
    }

    #[test]
    fn test_attach_pads_narrow_legend() {
        let canvas = RgbImage::from_pixel(120, 30, Rgb([1, 1, 1]));
        let legend = RgbImage::from_pixel(50, 50, Rgb([2, 2, 2]));
        let out = attach_legend(&canvas, &legend);

        assert_eq!(out.dimensions(), (120, 80));
        assert_eq!(*out.get_pixel(60, 10), WHITE);
        assert_eq!(*out.get_pixel(119, 79), Rgb([1, 1, 1]));
    }
}
