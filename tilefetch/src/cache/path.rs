//! Cache path layout.
//!
//! Tiles live under `<root>/map/{zoom}/{x}/{y}png.tile`. The filename
//! has no dot between the y coordinate and `png`; existing caches were
//! written with this layout, so it is kept for compatibility.

use std::path::{Path, PathBuf};

use crate::coord::TileCoord;

/// Returns the cache path for a tile under the given output root.
pub fn tile_path(output_root: &Path, tile: &TileCoord) -> PathBuf {
    output_root
        .join("map")
        .join(tile.zoom.to_string())
        .join(tile.x.to_string())
        .join(format!("{}png.tile", tile.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_path_layout() {
        let tile = TileCoord {
            x: 2113,
            y: 1501,
            zoom: 12,
        };
        let path = tile_path(Path::new("/cache"), &tile);
        assert_eq!(path, PathBuf::from("/cache/map/12/2113/1501png.tile"));
    }

    #[test]
    fn test_filename_has_no_extension_dot() {
        let tile = TileCoord { x: 0, y: 0, zoom: 0 };
        let path = tile_path(Path::new("out"), &tile);
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("0png.tile")
        );
    }

    #[test]
    fn test_relative_root_is_preserved() {
        let tile = TileCoord { x: 530, y: 373, zoom: 10 };
        let path = tile_path(Path::new("."), &tile);
        assert_eq!(path, PathBuf::from("./map/10/530/373png.tile"));
    }
}
