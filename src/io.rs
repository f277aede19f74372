//! Image I/O collaborators: decode from disk, encode to disk or memory.

use image::RgbImage;
use std::io::Cursor;
use std::path::Path;

use crate::error::{Fill2PaintError, Result};

/// Load an image from disk as 8-bit RGB
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|source| Fill2PaintError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// Save an image, format picked from the extension
pub fn save_image(img: &RgbImage, path: &Path) -> Result<()> {
    // Ensure output directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    img.save(path)?;
    Ok(())
}

/// Encode image as PNG bytes
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}
