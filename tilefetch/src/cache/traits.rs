//! Store abstraction over the on-disk tile cache.
//!
//! The `TileStore` trait is the seam between the fetch loop and the
//! filesystem: `contains` is the cache lookup, `put` persists a freshly
//! downloaded tile, `path` reports where a tile lives. Tests substitute
//! an in-memory implementation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::coord::TileCoord;

/// Errors that can occur while persisting tiles.
///
/// `CreateDir` means the cache tree itself could not be set up and is
/// treated as fatal by callers; `Write` is a per-tile failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to create a cache directory.
    #[error("failed to create directory {}: {}", .path.display(), .source)]
    CreateDir { path: PathBuf, source: io::Error },

    /// Failed to write a tile file.
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
}

/// Keyed storage for downloaded tiles.
///
/// A tile's existence in the store is its only state; entries are
/// written once and never mutated or deleted.
pub trait TileStore: Send + Sync {
    /// Returns true if the tile is already stored.
    fn contains(&self, tile: &TileCoord) -> bool;

    /// Stores the tile bytes, creating any missing parent directories.
    fn put(&self, tile: &TileCoord, bytes: &[u8]) -> Result<(), StoreError>;

    /// Returns the location the tile is (or would be) stored at.
    fn path(&self, tile: &TileCoord) -> PathBuf;
}
