//! Pixel art to paint-by-number templates.
//!
//! Every source pixel becomes a square cell on a grid, marked either with a
//! filled circle of its color or with a number that refers to a color legend.

pub mod canvas;
pub mod catalog;
pub mod config;
pub mod error;
pub mod font;
pub mod io;
pub mod jobs;
pub mod legend;
pub mod preview;
pub mod renderer;

pub use catalog::{ColorCatalog, ColorKey, LegendOrder};
pub use config::{JobConfig, OutputJob};
pub use error::{Fill2PaintError, Result};
pub use renderer::{render, render_detailed, Mode, RenderOutput, RenderSettings};

/// Install the stderr log subscriber used by the binaries, `RUST_LOG` overrides `info`
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
