use crate::component::store_error::StoreError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Image => "image",
            Self::Video => "video",
        };
        f.write_str(name)
    }
}

/// One catalog entry. `link` and `thumbnail` are storage-relative paths
/// derived from the raw filename; `description` is only serialized when it
/// was actually provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: String,
    pub link: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct MediaDocument {
    #[serde(default)]
    media: Vec<MediaItem>,
}

/// Storage path for a raw filename: videos live under `/videos/`, images
/// under `/images/`.
fn storage_link(kind: MediaKind, filename: &str) -> String {
    match kind {
        MediaKind::Video => format!("/videos/{filename}"),
        MediaKind::Image => format!("/images/{filename}"),
    }
}

/// Thumbnail path for a video filename: extension replaced with `.jpg`,
/// rooted under `/thumbnails/`.
fn thumbnail_link(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map_or_else(|| filename.to_string(), |s| s.to_string_lossy().into_owned());
    format!("/thumbnails/{stem}.jpg")
}

/// Media catalog over a single JSON document, with the same whole-file
/// read-mutate-write discipline and 1-based positional ids as the tile
/// store. Unlike tiles, entries are always appended.
pub struct MediaStore {
    path: PathBuf,
}

impl MediaStore {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Writes the empty catalog skeleton if the file does not exist yet.
    pub fn ensure_initialized(&self) -> Result<()> {
        if !self.path.exists() {
            self.write(&MediaDocument::default())?;
        }
        Ok(())
    }

    fn read(&self) -> Result<MediaDocument> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read media from {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse media from {}", self.path.display()))
    }

    fn write(&self, document: &MediaDocument) -> Result<()> {
        let content = serde_json::to_string(document).context("Failed to serialize media")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write media to {}", self.path.display()))?;
        Ok(())
    }

    pub fn get(&self) -> Result<Vec<MediaItem>> {
        let document = self.read()?;
        Ok(document.media)
    }

    /// Appends a catalog entry. The link is derived from the kind and raw
    /// filename; videos additionally get a derived thumbnail path.
    pub fn add(
        &self,
        title: &str,
        filename: &str,
        kind: MediaKind,
        description: Option<&str>,
    ) -> Result<MediaItem> {
        let thumbnail = match kind {
            MediaKind::Video => Some(thumbnail_link(filename)),
            MediaKind::Image => None,
        };
        let item = MediaItem {
            title: title.to_string(),
            link: storage_link(kind, filename),
            kind,
            thumbnail,
            description: description.map(std::string::ToString::to_string),
        };

        let mut document = self.read()?;
        document.media.push(item.clone());
        self.write(&document)?;
        Ok(item)
    }

    /// Removes the entry at a 1-based id; ids outside `[1, len]` are
    /// rejected without touching the document.
    pub fn remove(&self, id: usize) -> Result<()> {
        let mut document = self.read()?;
        if id == 0 || id > document.media.len() {
            return Err(StoreError::InvalidId {
                id,
                len: document.media.len(),
            }
            .into());
        }
        document.media.remove(id - 1);
        self.write(&document)?;
        Ok(())
    }

    /// Overwrites only the supplied fields. A supplied filename recomputes
    /// the link (and for videos the thumbnail) with the same rule as `add`,
    /// using the supplied kind when given, the stored one otherwise.
    pub fn edit(
        &self,
        id: usize,
        title: Option<&str>,
        filename: Option<&str>,
        kind: Option<MediaKind>,
        description: Option<&str>,
    ) -> Result<MediaItem> {
        let mut document = self.read()?;
        if id == 0 || id > document.media.len() {
            return Err(StoreError::InvalidId {
                id,
                len: document.media.len(),
            }
            .into());
        }

        let item = &mut document.media[id - 1];
        if let Some(title) = title {
            item.title = title.to_string();
        }
        if let Some(kind) = kind {
            item.kind = kind;
        }
        if let Some(filename) = filename {
            item.link = storage_link(item.kind, filename);
            item.thumbnail = match item.kind {
                MediaKind::Video => Some(thumbnail_link(filename)),
                MediaKind::Image => None,
            };
        }
        if let Some(description) = description {
            item.description = Some(description.to_string());
        }
        let updated = item.clone();
        self.write(&document)?;
        Ok(updated)
    }

    /// Rewrites the document as the empty catalog skeleton.
    pub fn clear(&self) -> Result<()> {
        self.write(&MediaDocument::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> MediaStore {
        let store = MediaStore::new(&temp_dir.path().join("media.json"));
        store.ensure_initialized().unwrap();
        store
    }

    #[test]
    fn test_add_video_derives_link_and_thumbnail() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let item = store
            .add("Rundgang", "tour.mp4", MediaKind::Video, None)
            .unwrap();
        assert_eq!(item.link, "/videos/tour.mp4");
        assert_eq!(item.thumbnail.as_deref(), Some("/thumbnails/tour.jpg"));
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_add_image_has_no_thumbnail() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let item = store
            .add("Poster", "poster.png", MediaKind::Image, Some("Lobby"))
            .unwrap();
        assert_eq!(item.link, "/images/poster.png");
        assert_eq!(item.thumbnail, None);
        assert_eq!(item.description.as_deref(), Some("Lobby"));
    }

    #[test]
    fn test_description_absence_survives_serialization() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("media.json");
        let store = MediaStore::new(&path);
        store.ensure_initialized().unwrap();

        store.add("Poster", "poster.png", MediaKind::Image, None).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("description"));
        assert!(!raw.contains("thumbnail"));
    }

    #[test]
    fn test_remove_shifts_later_ids() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        for name in ["a.png", "b.png", "c.png"] {
            store.add(name, name, MediaKind::Image, None).unwrap();
        }
        store.remove(1).unwrap();

        let media = store.get().unwrap();
        assert_eq!(media.len(), 2);
        assert_eq!(media[0].title, "b.png");
    }

    #[test]
    fn test_remove_rejects_ids_outside_bounds() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.add("Only", "x.png", MediaKind::Image, None).unwrap();

        // The legacy bound let len + 1 through; here it is rejected.
        for id in [0, 2] {
            let err = store.remove(id).unwrap_err();
            assert_eq!(
                err.downcast_ref::<StoreError>(),
                Some(&StoreError::InvalidId { id, len: 1 })
            );
        }
        assert_eq!(store.get().unwrap().len(), 1);
    }

    #[test]
    fn test_edit_recomputes_link_with_canonical_rule() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.add("Poster", "old.png", MediaKind::Image, None).unwrap();
        let edited = store
            .edit(1, None, Some("new.png"), None, None)
            .unwrap();

        // The legacy edit rule dropped the /images/ prefix; the canonical
        // rule matches add.
        assert_eq!(edited.link, "/images/new.png");
        assert_eq!(edited.thumbnail, None);
    }

    #[test]
    fn test_edit_kind_change_with_filename_switches_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.add("Asset", "a.png", MediaKind::Image, None).unwrap();
        let edited = store
            .edit(1, None, Some("a.mp4"), Some(MediaKind::Video), None)
            .unwrap();

        assert_eq!(edited.link, "/videos/a.mp4");
        assert_eq!(edited.thumbnail.as_deref(), Some("/thumbnails/a.jpg"));
    }

    #[test]
    fn test_edit_with_no_fields_is_a_noop() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let added = store
            .add("Keep", "keep.mp4", MediaKind::Video, Some("stays"))
            .unwrap();
        let edited = store.edit(1, None, None, None, None).unwrap();
        assert_eq!(edited, added);
    }

    #[test]
    fn test_clear_empties_the_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.add("A", "a.png", MediaKind::Image, None).unwrap();
        store.clear().unwrap();
        assert!(store.get().unwrap().is_empty());
    }

    #[test]
    fn test_thumbnail_link_replaces_any_extension() {
        assert_eq!(thumbnail_link("clip.mp4"), "/thumbnails/clip.jpg");
        assert_eq!(thumbnail_link("clip.v2.mp4"), "/thumbnails/clip.v2.jpg");
        assert_eq!(thumbnail_link("noext"), "/thumbnails/noext.jpg");
    }
}
