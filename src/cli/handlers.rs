//! Command handlers shared by the argument dispatch and the wizard.
//!
//! Handlers resolve store paths through the configuration, run the store
//! operation and render the outcome through the injected reporter. Invalid
//! ids are reported and never propagate; real I/O failures do.

use crate::component::{
    ItemStore, Language, MediaItem, MediaKind, MediaStore, StoreError, ThumbnailGenerator,
    TileType,
};
use crate::config::{
    Configuration, ITEMS_CONFIG_KEY, KIOSK_SECTION, MEDIA_CONFIG_KEY, MEDIA_DIRECTORY_KEY,
    MEDIA_SUBDIRECTORIES,
};
use crate::report::Reporter;
use crate::tools::{ensure_directory_exists, validate_directory_exists};
use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

const TILE_HEADER: [&str; 5] = ["ID", "Title", "Link", "Type", "Language"];
const MEDIA_HEADER: [&str; 6] = ["ID", "Title", "Link", "Type", "Thumbnail", "Description"];

pub fn open_item_store(config: &Configuration) -> Result<ItemStore> {
    let path = config.value(KIOSK_SECTION, ITEMS_CONFIG_KEY)?;
    let store = ItemStore::new(Path::new(&path));
    store.ensure_initialized()?;
    Ok(store)
}

pub fn open_media_store(config: &Configuration) -> Result<MediaStore> {
    let path = config.value(KIOSK_SECTION, MEDIA_CONFIG_KEY)?;
    let store = MediaStore::new(Path::new(&path));
    store.ensure_initialized()?;
    Ok(store)
}

/// Reports an invalid-id error and swallows it; anything else propagates.
fn report_store_error(error: anyhow::Error, reporter: &dyn Reporter) -> Result<()> {
    if error.downcast_ref::<StoreError>().is_some() {
        reporter.error(&error.to_string());
        Ok(())
    } else {
        Err(error)
    }
}

pub fn show_config(
    config: &Configuration,
    all: bool,
    section: Option<&str>,
    reporter: &dyn Reporter,
) -> Result<()> {
    let render = |name: &str| -> Result<()> {
        let rows: Vec<Vec<String>> = config
            .section(name)?
            .into_iter()
            .map(|(key, value)| vec![key, value])
            .collect();
        reporter.table(Some(name), &["Key", "Value"], &rows);
        Ok(())
    };

    if all {
        for name in config.sections()? {
            render(&name)?;
        }
        return Ok(());
    }
    if let Some(name) = section {
        return render(name);
    }
    reporter.warn("Nothing to show; pass --all or --section.");
    Ok(())
}

/// Adds a tile to every targeted language.
///
/// The position is validated against each targeted list before the first
/// insert, so an out-of-range position on one language leaves both lists
/// untouched.
pub fn add_tile(
    store: &ItemStore,
    languages: &[Language],
    title: &str,
    link: &str,
    kind: TileType,
    position: i64,
    reporter: &dyn Reporter,
) -> Result<()> {
    if position > 1 {
        for language in languages {
            let len = store.get(*language)?.len();
            if position as usize > len {
                reporter.error(&format!("Position is out of range: {position}"));
                return Ok(());
            }
        }
    }

    let mut rows = Vec::new();
    for language in languages {
        let added = store.add(*language, title, link, kind, position)?;
        info!("Tile added to {}: {title}", added.language);
        rows.push(vec![
            (rows.len() + 1).to_string(),
            added.tile.title,
            added.tile.link,
            added.tile.kind.to_string(),
            added.language.to_string(),
        ]);
    }
    reporter.table(None, &TILE_HEADER, &rows);
    Ok(())
}

pub fn remove_tile(
    store: &ItemStore,
    languages: &[Language],
    id: usize,
    reporter: &dyn Reporter,
) -> Result<()> {
    for language in languages {
        match store.remove(*language, id) {
            Ok(()) => reporter.success(&format!("Tile removed: {id} ({language})")),
            Err(e) => report_store_error(e, reporter)?,
        }
    }
    Ok(())
}

pub fn list_tiles(store: &ItemStore, reporter: &dyn Reporter) -> Result<()> {
    for language in Language::ALL {
        let rows: Vec<Vec<String>> = store
            .get(language)?
            .into_iter()
            .enumerate()
            .map(|(index, tile)| {
                vec![
                    (index + 1).to_string(),
                    tile.title,
                    tile.link,
                    tile.kind.to_string(),
                ]
            })
            .collect();
        let title = format!("{}: Tiles", language.as_str().to_uppercase());
        reporter.table(Some(title.as_str()), &TILE_HEADER[..4], &rows);
    }
    Ok(())
}

pub fn edit_tile(
    store: &ItemStore,
    id: usize,
    language: Language,
    title: Option<&str>,
    link: Option<&str>,
    kind: Option<TileType>,
    reporter: &dyn Reporter,
) -> Result<()> {
    match store.edit(id, language, title, link, kind) {
        Ok(tile) => {
            reporter.table(
                None,
                &TILE_HEADER,
                &[vec![
                    id.to_string(),
                    tile.title,
                    tile.link,
                    tile.kind.to_string(),
                    language.to_string(),
                ]],
            );
            reporter.success(&format!("Tile edited: {id}"));
            Ok(())
        }
        Err(e) => report_store_error(e, reporter),
    }
}

/// Removes the given ids from both languages.
///
/// Ids are deduplicated and processed highest first, so one removal never
/// shifts the position a later id refers to.
pub fn bulk_remove_tiles(store: &ItemStore, ids: &[usize], reporter: &dyn Reporter) -> Result<()> {
    let mut ids: Vec<usize> = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids.reverse();

    for language in Language::ALL {
        for id in &ids {
            match store.remove(language, *id) {
                Ok(()) => info!("Tile removed: {id} ({language})"),
                Err(e) => report_store_error(e, reporter)?,
            }
        }
    }
    reporter.success("Tiles removed.");
    Ok(())
}

pub fn clear_tiles(store: &ItemStore, reporter: &dyn Reporter) -> Result<()> {
    store.clear()?;
    reporter.success("All tiles removed.");
    Ok(())
}

fn media_row(id: usize, item: MediaItem) -> Vec<String> {
    vec![
        id.to_string(),
        item.title,
        item.link,
        item.kind.to_string(),
        item.thumbnail.unwrap_or_default(),
        item.description.unwrap_or_default(),
    ]
}

pub fn add_media(
    store: &MediaStore,
    title: &str,
    filename: &str,
    kind: MediaKind,
    description: Option<&str>,
    reporter: &dyn Reporter,
) -> Result<()> {
    let item = store.add(title, filename, kind, description)?;
    info!("Media added: {title}");
    let id = store.get()?.len();
    reporter.table(None, &MEDIA_HEADER, &[media_row(id, item)]);
    Ok(())
}

pub fn remove_media(store: &MediaStore, id: usize, reporter: &dyn Reporter) -> Result<()> {
    match store.remove(id) {
        Ok(()) => {
            reporter.success(&format!("Media removed: {id}"));
            Ok(())
        }
        Err(e) => report_store_error(e, reporter),
    }
}

pub fn list_media(store: &MediaStore, reporter: &dyn Reporter) -> Result<()> {
    let rows: Vec<Vec<String>> = store
        .get()?
        .into_iter()
        .enumerate()
        .map(|(index, item)| media_row(index + 1, item))
        .collect();
    reporter.table(Some("Media"), &MEDIA_HEADER, &rows);
    Ok(())
}

pub fn edit_media(
    store: &MediaStore,
    id: usize,
    title: Option<&str>,
    filename: Option<&str>,
    kind: Option<MediaKind>,
    description: Option<&str>,
    reporter: &dyn Reporter,
) -> Result<()> {
    match store.edit(id, title, filename, kind, description) {
        Ok(item) => {
            reporter.table(None, &MEDIA_HEADER, &[media_row(id, item)]);
            reporter.success(&format!("Media edited: {id}"));
            Ok(())
        }
        Err(e) => report_store_error(e, reporter),
    }
}

pub fn clear_media(store: &MediaStore, reporter: &dyn Reporter) -> Result<()> {
    store.clear()?;
    reporter.success("All media removed.");
    Ok(())
}

/// Runs the thumbnail batch. Source and target default to the `videos` and
/// `thumbnails` subdirectories of the configured media directory, which are
/// bootstrapped together with `images` when missing.
pub fn generate_thumbnails(
    config: &Configuration,
    source: Option<PathBuf>,
    target: Option<PathBuf>,
    reporter: &dyn Reporter,
) -> Result<()> {
    let media_directory = PathBuf::from(config.value(KIOSK_SECTION, MEDIA_DIRECTORY_KEY)?);
    for subdirectory in MEDIA_SUBDIRECTORIES {
        ensure_directory_exists(&media_directory.join(subdirectory))?;
    }

    // an explicitly named source must exist; the default was just created
    let source = match source {
        Some(dir) => {
            validate_directory_exists(&dir)?;
            dir
        }
        None => media_directory.join("videos"),
    };
    let target = target.unwrap_or_else(|| media_directory.join("thumbnails"));

    ThumbnailGenerator::default().generate(&source, &target, reporter)?;
    Ok(())
}
