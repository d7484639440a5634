//! Filesystem-backed tile store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cache::path::tile_path;
use crate::cache::traits::{StoreError, TileStore};
use crate::coord::TileCoord;

/// Tile store that writes tiles under an output root on disk.
///
/// Presence of the tile file is the cache index; there is no manifest
/// or metadata to keep in sync.
pub struct DiskTileStore {
    output_root: PathBuf,
}

impl DiskTileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is created lazily
    /// on the first `put`.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}

impl TileStore for DiskTileStore {
    fn contains(&self, tile: &TileCoord) -> bool {
        self.path(tile).exists()
    }

    fn put(&self, tile: &TileCoord, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path(tile);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        if let Err(source) = fs::write(&path, bytes) {
            // Drop any partial file so a rerun retries this tile.
            let _ = fs::remove_file(&path);
            return Err(StoreError::Write { path, source });
        }

        debug!(path = %path.display(), bytes = bytes.len(), "stored tile");
        Ok(())
    }

    fn path(&self, tile: &TileCoord) -> PathBuf {
        tile_path(&self.output_root, tile)
    }
}
