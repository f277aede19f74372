use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use fill2paint::config::DEFAULT_PLAIN_PATH;
use fill2paint::io::load_image;
use fill2paint::jobs::run_jobs;
use fill2paint::preview::{NoPreview, Preview, TerminalPreview};
use fill2paint::JobConfig;

#[derive(Parser, Debug)]
#[command(
    name = "fill2paint-circles",
    about = "Render a plain circle grid from pixel art",
    version
)]
struct Cli {
    /// Source image, one cell per pixel
    image: PathBuf,

    /// Output path of the template
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_PLAIN_PATH)]
    output: PathBuf,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = 10)]
    cell_size: u32,

    /// Show the result and wait for Enter before exiting
    #[arg(short, long)]
    wait: bool,
}

fn main() -> Result<()> {
    fill2paint::init_logging();
    let cli = Cli::parse();

    let mut config = JobConfig::plain(cli.cell_size);
    config.jobs[0].path = cli.output;
    config.validate()?;

    let source = load_image(&cli.image)?;

    let mut preview: Box<dyn Preview> = if cli.wait {
        Box::new(TerminalPreview::stdio())
    } else {
        Box::new(NoPreview)
    };

    let summaries = run_jobs(&source, &config, preview.as_mut())
        .with_context(|| format!("Failed to render {}", cli.image.display()))?;
    for summary in &summaries {
        println!("Saved file '{}'", summary.path.display());
    }

    preview.wait_for_key()?;
    Ok(())
}
