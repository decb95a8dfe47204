use std::path::PathBuf;

/// Section holding the kiosk file locations.
pub const KIOSK_SECTION: &str = "kiosk";
pub const ITEMS_CONFIG_KEY: &str = "items_config_file";
pub const MEDIA_CONFIG_KEY: &str = "media_config_file";
pub const MEDIA_DIRECTORY_KEY: &str = "media_directory";

/// Subdirectories expected under `media_directory`.
pub const MEDIA_SUBDIRECTORIES: [&str; 3] = ["images", "videos", "thumbnails"];

/// Handle on the INI configuration file.
///
/// The file is re-read on every call; no parsed state outlives a single
/// lookup, matching the whole-file discipline of the JSON stores.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub(crate) path: PathBuf,
}

impl Configuration {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
