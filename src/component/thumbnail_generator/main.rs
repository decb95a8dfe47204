use super::frame_extractor::extract_frame;
use crate::report::Reporter;
use crate::tools::{VideoFile, ensure_directory_exists, get_video_info, scan_video_files};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use std::path::{Path, PathBuf};

/// Default extraction point, one second into the video.
pub const DEFAULT_TIMESTAMP_SECONDS: f64 = 1.0;

/// Batch outcome. One bad video never aborts the batch; it is counted here
/// and logged per file.
#[derive(Debug, Default)]
pub struct GenerationResult {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Writes one extracted frame per video in a directory to a target
/// directory, named `<video stem>.jpg`.
pub struct ThumbnailGenerator {
    timestamp_seconds: f64,
}

impl ThumbnailGenerator {
    #[must_use]
    pub const fn new(timestamp_seconds: f64) -> Self {
        Self { timestamp_seconds }
    }

    /// Lists the videos the batch would process.
    pub fn list_videos(video_dir: &Path) -> Result<Vec<VideoFile>> {
        scan_video_files(video_dir)
    }

    pub fn generate(
        &self,
        video_dir: &Path,
        output_dir: &Path,
        reporter: &dyn Reporter,
    ) -> Result<GenerationResult> {
        ensure_directory_exists(output_dir)?;

        let videos = Self::list_videos(video_dir)?;
        let mut result = GenerationResult {
            total: videos.len(),
            ..Default::default()
        };

        if videos.is_empty() {
            reporter.warn(&format!("No videos found in {}", video_dir.display()));
            return Ok(result);
        }

        reporter.info(&format!(
            "Generating thumbnails for {} videos into {}...",
            videos.len(),
            output_dir.display()
        ));

        let progress_bar = ProgressBar::new(videos.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template"),
        );

        for video in &videos {
            progress_bar.set_message(video.name.clone());
            match self.generate_one(video, output_dir) {
                Ok(target) => {
                    info!("Thumbnail written: {}", target.display());
                    result.successful += 1;
                }
                Err(e) => {
                    error!("Thumbnail failed for {}: {e:#}", video.name);
                    progress_bar.println(format!("Could not generate thumbnail for {}: {e:#}", video.name));
                    result.failed += 1;
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        if result.failed > 0 {
            reporter.warn(&format!(
                "{} of {} thumbnails failed, see log output",
                result.failed, result.total
            ));
        }
        reporter.success(&format!("{} thumbnails generated.", result.successful));

        Ok(result)
    }

    fn generate_one(&self, video: &VideoFile, output_dir: &Path) -> Result<PathBuf> {
        let info = get_video_info(&video.path)?;

        // Seeking past the end yields no frame, so clamp short videos to
        // just before their last instant
        let timestamp = self
            .timestamp_seconds
            .min((info.duration_seconds - 0.1).max(0.0));
        debug!(
            "Extracting {} at {timestamp:.3}s ({:.2} fps, {:.2}s long)",
            video.name, info.frame_rate, info.duration_seconds
        );

        let target = output_dir.join(thumbnail_file_name(&video.name));
        extract_frame(&video.path, timestamp, &target)?;
        Ok(target)
    }
}

impl Default for ThumbnailGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_SECONDS)
    }
}

/// Output name for a video: extension swapped for `.jpg`.
fn thumbnail_file_name(video_name: &str) -> String {
    let stem = Path::new(video_name)
        .file_stem()
        .map_or_else(|| video_name.to_string(), |s| s.to_string_lossy().into_owned());
    format!("{stem}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_file_name() {
        assert_eq!(thumbnail_file_name("tour.mp4"), "tour.jpg");
        assert_eq!(thumbnail_file_name("lobby.cam.mp4"), "lobby.cam.jpg");
    }

    #[test]
    fn test_default_timestamp() {
        let generator = ThumbnailGenerator::default();
        assert!((generator.timestamp_seconds - 1.0).abs() < f64::EPSILON);
    }
}
