mod main;

pub use main::{AddedTile, ItemStore, Language, Tile, TileType};
