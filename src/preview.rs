//! Presentation of rendered templates to the user.

use image::RgbImage;
use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::io::encode_png;

pub trait Preview {
    /// Present one rendered raster, must not block
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()>;

    /// Block until the user acknowledges
    fn wait_for_key(&mut self) -> Result<()>;
}

/// Shows nothing, never waits
#[derive(Debug, Default)]
pub struct NoPreview;

impl Preview for NoPreview {
    fn show(&mut self, _title: &str, _image: &RgbImage) -> Result<()> {
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Describes each raster on a text stream and waits for Enter on another
pub struct TerminalPreview<R, W> {
    input: R,
    output: W,
}

impl TerminalPreview<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPreview<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Preview for TerminalPreview<R, W> {
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()> {
        let (width, height) = image.dimensions();
        let png = encode_png(image)?;
        writeln!(self.output, "[{}] {}x{} ({} bytes as PNG)", title, width, height, png.len())?;
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<()> {
        write!(self.output, "Press Enter to exit...")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }
}
