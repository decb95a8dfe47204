use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Extracts a single frame at `timestamp` seconds into a JPEG.
///
/// Fast keyframe seek (`-ss` before `-i`), one decoded frame, single
/// decoder thread. The ffmpeg process has terminated when this returns,
/// success or not.
pub fn extract_frame(video_path: &Path, timestamp: f64, output_path: &Path) -> Result<()> {
    let seek = format!("{timestamp:.3}");
    let output = Command::new("ffmpeg")
        .args(["-hide_banner", "-loglevel", "error", "-ss"])
        .arg(seek)
        .arg("-i")
        .arg(video_path)
        .args([
            "-frames:v", "1", "-an", "-sn", "-dn", "-threads", "1", "-q:v", "2", "-y",
        ])
        .arg(output_path)
        .output()
        .with_context(|| format!("Failed to run ffmpeg for {}", video_path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("ffmpeg failed: {}", stderr.trim());
    }

    // ffmpeg can exit zero without producing a frame when the seek lands
    // past the last packet
    if !output_path.exists() {
        anyhow::bail!("No frame written to {}", output_path.display());
    }

    Ok(())
}
