//! Core components: the two JSON stores and the thumbnail batch.

pub mod item_store;
pub mod media_store;
mod store_error;
pub mod thumbnail_generator;

pub use item_store::{AddedTile, ItemStore, Language, Tile, TileType};
pub use media_store::{MediaItem, MediaKind, MediaStore};
pub use store_error::StoreError;
pub use thumbnail_generator::{GenerationResult, ThumbnailGenerator};
