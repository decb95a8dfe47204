use thiserror::Error;

/// Typed failures shared by the tile and media stores.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The 1-based id points outside the current list.
    #[error("Invalid ID: {id} (list has {len} entries)")]
    InvalidId { id: usize, len: usize },
}
