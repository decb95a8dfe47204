use crate::component::store_error::StoreError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Tile language. The language is the list key of the document, never a
/// field of the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::De, Self::En];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    Website,
    External,
    Pdf,
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Website => "website",
            Self::External => "external",
            Self::Pdf => "pdf",
        };
        f.write_str(name)
    }
}

/// One localized link entry of the kiosk display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub title: String,
    pub link: String,
    #[serde(rename = "type")]
    pub kind: TileType,
}

/// A freshly inserted tile plus the language it landed in, for display.
#[derive(Debug, Clone)]
pub struct AddedTile {
    pub tile: Tile,
    pub language: Language,
}

/// On-disk shape: two parallel language lists. A key missing from an older
/// document reads as an empty list and is written back on the next save.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TileDocument {
    #[serde(default)]
    de: Vec<Tile>,
    #[serde(default)]
    en: Vec<Tile>,
}

impl TileDocument {
    fn list(&self, language: Language) -> &Vec<Tile> {
        match language {
            Language::De => &self.de,
            Language::En => &self.en,
        }
    }

    fn list_mut(&mut self, language: Language) -> &mut Vec<Tile> {
        match language {
            Language::De => &mut self.de,
            Language::En => &mut self.en,
        }
    }
}

/// Tile store over a single JSON document.
///
/// Every operation re-reads the file, mutates an in-memory copy and rewrites
/// the whole document. Identity is the 1-based position within a language
/// list; ids shift on every insert and removal.
pub struct ItemStore {
    path: PathBuf,
}

impl ItemStore {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Writes the empty two-language skeleton if the file does not exist yet.
    pub fn ensure_initialized(&self) -> Result<()> {
        if !self.path.exists() {
            self.write(&TileDocument::default())?;
        }
        Ok(())
    }

    fn read(&self) -> Result<TileDocument> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read tiles from {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse tiles from {}", self.path.display()))
    }

    fn write(&self, document: &TileDocument) -> Result<()> {
        let content = serde_json::to_string(document).context("Failed to serialize tiles")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write tiles to {}", self.path.display()))?;
        Ok(())
    }

    /// Stored list for a language, verbatim.
    pub fn get(&self, language: Language) -> Result<Vec<Tile>> {
        let document = self.read()?;
        Ok(document.list(language).clone())
    }

    /// Inserts a tile. `position > 0` inserts before that 1-based position;
    /// a position beyond the list end appends, as does `position <= 0`.
    pub fn add(
        &self,
        language: Language,
        title: &str,
        link: &str,
        kind: TileType,
        position: i64,
    ) -> Result<AddedTile> {
        let tile = Tile {
            title: title.to_string(),
            link: link.to_string(),
            kind,
        };

        let mut document = self.read()?;
        let list = document.list_mut(language);
        let index = if position > 0 {
            (position as usize - 1).min(list.len())
        } else {
            list.len()
        };
        list.insert(index, tile.clone());
        self.write(&document)?;

        Ok(AddedTile { tile, language })
    }

    /// Removes the tile at a 1-based id. Ids outside `[1, len]` are rejected
    /// without touching the document.
    pub fn remove(&self, language: Language, id: usize) -> Result<()> {
        let mut document = self.read()?;
        let list = document.list_mut(language);
        if id == 0 || id > list.len() {
            return Err(StoreError::InvalidId {
                id,
                len: list.len(),
            }
            .into());
        }
        list.remove(id - 1);
        self.write(&document)?;
        Ok(())
    }

    /// Overwrites only the supplied fields of the tile at `id`, returning
    /// the updated record.
    pub fn edit(
        &self,
        id: usize,
        language: Language,
        title: Option<&str>,
        link: Option<&str>,
        kind: Option<TileType>,
    ) -> Result<Tile> {
        let mut document = self.read()?;
        let list = document.list_mut(language);
        if id == 0 || id > list.len() {
            return Err(StoreError::InvalidId {
                id,
                len: list.len(),
            }
            .into());
        }

        let tile = &mut list[id - 1];
        if let Some(title) = title {
            tile.title = title.to_string();
        }
        if let Some(link) = link {
            tile.link = link.to_string();
        }
        if let Some(kind) = kind {
            tile.kind = kind;
        }
        let updated = tile.clone();
        self.write(&document)?;
        Ok(updated)
    }

    /// Rewrites the document as the empty two-language skeleton.
    pub fn clear(&self) -> Result<()> {
        self.write(&TileDocument::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> ItemStore {
        let store = ItemStore::new(&temp_dir.path().join("items.json"));
        store.ensure_initialized().unwrap();
        store
    }

    #[test]
    fn test_add_appends_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store
            .add(Language::De, "Startseite", "/home", TileType::Website, 0)
            .unwrap();
        store
            .add(Language::De, "Speiseplan", "/menu.pdf", TileType::Pdf, 0)
            .unwrap();

        let tiles = store.get(Language::De).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].title, "Startseite");
        assert_eq!(tiles[1].title, "Speiseplan");
        assert!(store.get(Language::En).unwrap().is_empty());
    }

    #[test]
    fn test_add_at_position_shifts_later_tiles() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store
            .add(Language::En, "First", "/1", TileType::Website, 0)
            .unwrap();
        store
            .add(Language::En, "Second", "/2", TileType::Website, 0)
            .unwrap();
        store
            .add(Language::En, "Inserted", "/x", TileType::External, 1)
            .unwrap();

        let tiles = store.get(Language::En).unwrap();
        assert_eq!(tiles[0].title, "Inserted");
        assert_eq!(tiles[1].title, "First");
        assert_eq!(tiles[2].title, "Second");
    }

    #[test]
    fn test_add_beyond_end_appends() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store
            .add(Language::De, "Only", "/1", TileType::Website, 0)
            .unwrap();
        store
            .add(Language::De, "Tail", "/2", TileType::Website, 99)
            .unwrap();

        let tiles = store.get(Language::De).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[1].title, "Tail");
    }

    #[test]
    fn test_remove_shifts_later_ids() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        for title in ["A", "B", "C"] {
            store
                .add(Language::De, title, "/x", TileType::Website, 0)
                .unwrap();
        }
        store.remove(Language::De, 2).unwrap();

        let tiles = store.get(Language::De).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].title, "A");
        assert_eq!(tiles[1].title, "C");
    }

    // The legacy bound accepted id == len + 1 and then failed inside the
    // list removal; the bound here is [1, len] and len + 1 is rejected
    // up front with no mutation.
    #[test]
    fn test_remove_rejects_ids_outside_bounds() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store
            .add(Language::De, "Only", "/1", TileType::Website, 0)
            .unwrap();

        for id in [0, 2, 99] {
            let err = store.remove(Language::De, id).unwrap_err();
            assert_eq!(
                err.downcast_ref::<StoreError>(),
                Some(&StoreError::InvalidId { id, len: 1 })
            );
        }
        assert_eq!(store.get(Language::De).unwrap().len(), 1);
    }

    #[test]
    fn test_edit_with_no_fields_is_a_noop() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let added = store
            .add(Language::En, "Keep", "/keep", TileType::Pdf, 0)
            .unwrap();
        let edited = store.edit(1, Language::En, None, None, None).unwrap();

        assert_eq!(edited, added.tile);
        assert_eq!(store.get(Language::En).unwrap()[0], added.tile);
    }

    #[test]
    fn test_edit_overwrites_only_supplied_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store
            .add(Language::En, "Old", "/old", TileType::Website, 0)
            .unwrap();
        let edited = store
            .edit(1, Language::En, Some("New"), None, Some(TileType::External))
            .unwrap();

        assert_eq!(edited.title, "New");
        assert_eq!(edited.link, "/old");
        assert_eq!(edited.kind, TileType::External);
    }

    #[test]
    fn test_edit_out_of_range_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let err = store
            .edit(3, Language::De, Some("X"), None, None)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<StoreError>(),
            Some(&StoreError::InvalidId { id: 3, len: 0 })
        );
    }

    #[test]
    fn test_clear_empties_both_languages() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store
            .add(Language::De, "A", "/a", TileType::Website, 0)
            .unwrap();
        store
            .add(Language::En, "B", "/b", TileType::Website, 0)
            .unwrap();
        store.clear().unwrap();

        assert!(store.get(Language::De).unwrap().is_empty());
        assert!(store.get(Language::En).unwrap().is_empty());
    }

    #[test]
    fn test_document_with_missing_language_key_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        std::fs::write(&path, r#"{"de":[{"title":"A","link":"/a","type":"website"}]}"#).unwrap();

        let store = ItemStore::new(&path);
        assert_eq!(store.get(Language::De).unwrap().len(), 1);
        assert!(store.get(Language::En).unwrap().is_empty());
    }
}
