mod frame_extractor;
mod main;

pub use main::{DEFAULT_TIMESTAMP_SECONDS, GenerationResult, ThumbnailGenerator};
