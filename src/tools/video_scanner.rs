use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fixed video extension of the kiosk media tree.
pub const VIDEO_EXTENSION: &str = ".mp4";

#[derive(Debug, Clone)]
pub struct VideoFile {
    pub path: PathBuf,
    pub name: String,
}

/// Scans the immediate entries of `directory` for video files.
///
/// A missing directory yields an empty list rather than an error, so the
/// thumbnail batch can run against a not-yet-populated media tree.
pub fn scan_video_files(directory: &Path) -> Result<Vec<VideoFile>> {
    if !directory.exists() {
        return Ok(Vec::new());
    }

    let mut videos: Vec<VideoFile> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            if !name.to_lowercase().ends_with(VIDEO_EXTENSION) {
                return None;
            }
            Some(VideoFile {
                path: entry.into_path(),
                name,
            })
        })
        .collect();

    videos.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(videos)
}
