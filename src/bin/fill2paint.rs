use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use fill2paint::config::{CIRCLES_JOB, NUMBERS_JOB};
use fill2paint::io::load_image;
use fill2paint::jobs::run_jobs;
use fill2paint::preview::{NoPreview, Preview, TerminalPreview};
use fill2paint::JobConfig;

#[derive(Parser, Debug)]
#[command(
    name = "fill2paint",
    about = "Render circle and paint-by-number templates from pixel art",
    version
)]
struct Cli {
    /// Source image, one cell per pixel
    image: PathBuf,

    /// JSON job config, defaults to circles + numbers templates in /tmp
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output path of the circles template
    #[arg(long, value_name = "PATH")]
    circles_out: Option<PathBuf>,

    /// Output path of the numbers template
    #[arg(long, value_name = "PATH")]
    numbers_out: Option<PathBuf>,

    /// Write a JSON color report next to the numbers template
    #[arg(long)]
    report: bool,

    /// Show the results and wait for Enter before exiting
    #[arg(short, long)]
    wait: bool,
}

fn main() -> Result<()> {
    fill2paint::init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => JobConfig::load(path).with_context(|| format!("Failed to read config {}", path.display()))?,
        None => JobConfig::default(),
    };
    if let Some(path) = cli.circles_out {
        config.set_path(CIRCLES_JOB, path)?;
    }
    if let Some(path) = cli.numbers_out {
        config.set_path(NUMBERS_JOB, path)?;
    }
    config.export_report |= cli.report;

    let source = load_image(&cli.image)?;
    tracing::debug!(jobs = config.jobs.len(), "config ready");

    let mut preview: Box<dyn Preview> = if cli.wait {
        Box::new(TerminalPreview::stdio())
    } else {
        Box::new(NoPreview)
    };

    let summaries = run_jobs(&source, &config, preview.as_mut())
        .with_context(|| format!("Failed to render {}", cli.image.display()))?;
    for summary in &summaries {
        println!("Saved file '{}'", summary.path.display());
        if let Some(colors) = summary.colors {
            println!("  {} colors", colors);
        }
        if let Some(report) = &summary.report_path {
            println!("  report: '{}'", report.display());
        }
    }

    preview.wait_for_key()?;
    Ok(())
}
