//! Job configuration: which templates to render and where to write them.
//!
//! Stored as JSON. Every field is optional, missing ones take the defaults
//! below, so `{}` is a valid config that reproduces the stock behaviour.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Fill2PaintError, Result};
use crate::renderer::RenderSettings;

pub const DEFAULT_CIRCLES_PATH: &str = "/tmp/fill2paint_circles.png";
pub const DEFAULT_NUMBERS_PATH: &str = "/tmp/fill2paint_numbers.png";
pub const DEFAULT_PLAIN_PATH: &str = "/tmp/fill2paint_plain.png";

pub const CIRCLES_JOB: &str = "fill2paint_circles";
pub const NUMBERS_JOB: &str = "fill2paint_numbers";
pub const PLAIN_JOB: &str = "fill2paint";

/// One rendered template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputJob {
    /// Window title when previewing
    pub title: String,
    pub path: PathBuf,
    #[serde(default)]
    pub settings: RenderSettings,
}

impl OutputJob {
    pub fn new(title: &str, path: impl Into<PathBuf>, settings: RenderSettings) -> Self {
        Self {
            title: title.to_string(),
            path: path.into(),
            settings,
        }
    }

    /// Path of the JSON report written next to the image
    pub fn report_path(&self) -> PathBuf {
        self.path.with_extension("json")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub jobs: Vec<OutputJob>,
    /// Write a JSON report next to every numbers template (default: false)
    pub export_report: bool,
}

impl Default for JobConfig {
    /// Circles at cell size 12, then numbers with legend at cell size 15
    fn default() -> Self {
        Self {
            jobs: vec![
                OutputJob::new(CIRCLES_JOB, DEFAULT_CIRCLES_PATH, RenderSettings::circles(12)),
                OutputJob::new(NUMBERS_JOB, DEFAULT_NUMBERS_PATH, RenderSettings::numbers(15)),
            ],
            export_report: false,
        }
    }
}

impl JobConfig {
    /// Single circles-only template, no legend
    pub fn plain(cell_size: u32) -> Self {
        Self {
            jobs: vec![OutputJob::new(
                PLAIN_JOB,
                DEFAULT_PLAIN_PATH,
                RenderSettings::plain_circles(cell_size),
            )],
            export_report: false,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: JobConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.jobs.is_empty() {
            return Err(Fill2PaintError::InvalidParameter("config has no jobs".to_string()));
        }
        for job in &self.jobs {
            job.settings.validate().map_err(|e| {
                Fill2PaintError::InvalidParameter(format!("job '{}': {}", job.title, e))
            })?;
        }
        Ok(())
    }

    /// Redirect the first job with the given title to `path`
    pub fn set_path(&mut self, title: &str, path: PathBuf) -> Result<()> {
        let job = self
            .jobs
            .iter_mut()
            .find(|job| job.title == title)
            .ok_or_else(|| Fill2PaintError::InvalidParameter(format!("no job named '{}'", title)))?;
        job.path = path;
        Ok(())
    }
}
