mod main;

pub use main::{MediaItem, MediaKind, MediaStore};
