//! Runs every job of a [`JobConfig`] against one source image.

use image::RgbImage;
use std::fs;
use std::path::PathBuf;

use crate::config::JobConfig;
use crate::error::Result;
use crate::io::save_image;
use crate::preview::Preview;
use crate::renderer::render_detailed;

#[derive(Debug, Clone)]
pub struct JobSummary {
    pub title: String,
    pub path: PathBuf,
    pub report_path: Option<PathBuf>,
    pub output_size: (u32, u32),
    /// Distinct colors, numbers jobs only
    pub colors: Option<usize>,
}

/// Render, save and preview each job in order; stops at the first failure
pub fn run_jobs(source: &RgbImage, config: &JobConfig, preview: &mut dyn Preview) -> Result<Vec<JobSummary>> {
    let mut summaries = Vec::with_capacity(config.jobs.len());

    for job in &config.jobs {
        let output = render_detailed(source, &job.settings)?;
        save_image(&output.image, &job.path)?;
        tracing::info!(path = %job.path.display(), "saved template");

        let report_path = match &output.catalog {
            Some(_) if config.export_report => {
                let path = job.report_path();
                let json = serde_json::to_string_pretty(&output.report())?;
                fs::write(&path, json)?;
                tracing::info!(path = %path.display(), "saved report");
                Some(path)
            }
            _ => None,
        };

        preview.show(&job.title, &output.image)?;

        summaries.push(JobSummary {
            title: job.title.clone(),
            path: job.path.clone(),
            report_path,
            output_size: output.image.dimensions(),
            colors: output.catalog.as_ref().map(|c| c.len()),
        });
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputJob;
    use crate::io::load_image;
    use crate::preview::NoPreview;
    use crate::renderer::RenderSettings;
    use image::Rgb;

    #[derive(Default)]
    struct RecordingPreview {
        shown: Vec<(String, (u32, u32))>,
    }

    impl Preview for RecordingPreview {
        fn show(&mut self, title: &str, image: &RgbImage) -> Result<()> {
            self.shown.push((title.to_string(), image.dimensions()));
            Ok(())
        }

        fn wait_for_key(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fill2paint-jobs-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn source() -> RgbImage {
        RgbImage::from_fn(3, 2, |x, y| Rgb([(x * 60) as u8, (y * 90) as u8, 7]))
    }

    #[test]
    fn test_runs_every_job() {
        let dir = scratch_dir("all");
        let config = JobConfig {
            jobs: vec![
                OutputJob::new("circles", dir.join("c.png"), RenderSettings::circles(12)),
                OutputJob::new("numbers", dir.join("n.png"), RenderSettings::numbers(15)),
            ],
            export_report: true,
        };

        let mut preview = RecordingPreview::default();
        let summaries = run_jobs(&source(), &config, &mut preview).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].colors, None);
        assert_eq!(summaries[0].report_path, None);
        assert_eq!(summaries[1].colors, Some(6));
        assert_eq!(summaries[1].report_path, Some(dir.join("n.json")));

        // Circles: 36x24 is landscape, stored upright
        let circles = load_image(&dir.join("c.png")).unwrap();
        assert_eq!(circles.dimensions(), (24, 36));
        assert_eq!(summaries[0].output_size, (24, 36));

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("n.json")).unwrap()).unwrap();
        assert_eq!(report["colors"], 6);

        let titles: Vec<&str> = preview.shown.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, vec!["circles", "numbers"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_no_report_unless_asked() {
        let dir = scratch_dir("noreport");
        let config = JobConfig {
            jobs: vec![OutputJob::new("numbers", dir.join("n.png"), RenderSettings::numbers(10))],
            export_report: false,
        };

        let summaries = run_jobs(&source(), &config, &mut NoPreview).unwrap();
        assert_eq!(summaries[0].report_path, None);
        assert!(!dir.join("n.json").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_source_fails() {
        let dir = scratch_dir("empty");
        let config = JobConfig {
            jobs: vec![OutputJob::new("circles", dir.join("c.png"), RenderSettings::circles(10))],
            export_report: false,
        };
        assert!(run_jobs(&RgbImage::new(0, 0), &config, &mut NoPreview).is_err());
        assert!(!dir.join("c.png").exists());
    }
}
