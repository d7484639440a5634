//! Tile cache: path layout, store trait, and the disk-backed store.

mod disk;
mod path;
mod traits;

pub use disk::DiskTileStore;
pub use path::tile_path;
pub use traits::{StoreError, TileStore};

#[cfg(test)]
pub use traits::tests::{MemoryTileStore, PutFailure};
