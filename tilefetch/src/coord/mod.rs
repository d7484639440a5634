//! Coordinate conversion module
//!
//! Provides conversions from geographic coordinates (latitude/longitude)
//! to the Web Mercator tile grid used by OpenStreetMap tile servers, and
//! from geographic bounding boxes to inclusive tile rectangles.

mod types;

pub use types::{
    CoordError, GeoBounds, TileCoord, TileRect, TileRectIter, MAX_LAT, MAX_LON, MAX_RANGE_ZOOM,
    MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM,
};

use std::f64::consts::PI;

/// Converts geographic coordinates to tile coordinates.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-85.05112878 to 85.05112878)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `zoom` - Zoom level (0 to 18)
///
/// # Returns
///
/// A `Result` containing the tile coordinates or an error if inputs are invalid.
#[inline]
pub fn to_tile_coords(lat: f64, lon: f64, zoom: u8) -> Result<TileCoord, CoordError> {
    // Validate inputs
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }

    // Grid dimension at this zoom level
    let n = 2.0_f64.powi(zoom as i32);

    // Longitude to tile X coordinate
    let x = ((lon + 180.0) / 360.0 * n) as u32;

    // Latitude to tile Y coordinate via the Web Mercator projection.
    // asinh(tan lat) is the ln(tan lat + sec lat) of the textbook formula.
    let lat_rad = lat * PI / 180.0;
    let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n) as u32;

    Ok(TileCoord { x, y, zoom })
}

/// Converts a geographic bounding box to the inclusive tile rectangle
/// covering it at the given zoom level.
///
/// Projects the two opposite corners (north-west and south-east) and
/// min/maxes each axis independently. Tile Y grows southward while
/// latitude grows northward, so the normalization step keeps the
/// rectangle correct no matter which corner lands where.
pub fn to_tile_rect(bounds: &GeoBounds, zoom: u8) -> Result<TileRect, CoordError> {
    bounds.validate()?;

    let top_left = to_tile_coords(bounds.max_lat, bounds.min_lon, zoom)?;
    let bottom_right = to_tile_coords(bounds.min_lat, bounds.max_lon, zoom)?;

    Ok(TileRect {
        min_x: top_left.x.min(bottom_right.x),
        max_x: top_left.x.max(bottom_right.x),
        min_y: top_left.y.min(bottom_right.y),
        max_y: top_left.y.max(bottom_right.y),
        zoom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_york_city_at_zoom_16() {
        // New York City: 40.7128°N, 74.0060°W
        let result = to_tile_coords(40.7128, -74.0060, 16);
        assert!(result.is_ok(), "Valid coordinates should not error");

        let tile = result.unwrap();
        assert_eq!(tile.x, 19295);
        assert_eq!(tile.y, 24640);
        assert_eq!(tile.zoom, 16);
    }

    #[test]
    fn test_world_tile_at_zoom_zero() {
        let tile = to_tile_coords(0.0, 0.0, 0).unwrap();
        assert_eq!(tile.x, 0);
        assert_eq!(tile.y, 0);

        // Every valid location maps to the single zoom-0 tile
        let tile = to_tile_coords(51.5074, -0.1278, 0).unwrap();
        assert_eq!(tile.x, 0);
        assert_eq!(tile.y, 0);
    }

    #[test]
    fn test_origin_at_zoom_one() {
        // The equator/prime-meridian point falls in the south-east quadrant
        let tile = to_tile_coords(0.0, 0.0, 1).unwrap();
        assert_eq!(tile.x, 1);
        assert_eq!(tile.y, 1);
    }

    #[test]
    fn test_southern_hemisphere() {
        // Sydney: 33.8688°S, 151.2093°E
        let tile = to_tile_coords(-33.8688, 151.2093, 12).unwrap();
        assert_eq!(tile.x, 3768);
        assert_eq!(tile.y, 2457);
    }

    #[test]
    fn test_invalid_latitude() {
        let result = to_tile_coords(90.0, 0.0, 10);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            CoordError::InvalidLatitude(_)
        ));
    }

    #[test]
    fn test_invalid_longitude() {
        let result = to_tile_coords(45.0, 200.0, 10);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            CoordError::InvalidLongitude(_)
        ));
    }

    #[test]
    fn test_invalid_zoom() {
        let result = to_tile_coords(45.0, 5.0, 19);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CoordError::InvalidZoom(19)));
    }

    #[test]
    fn test_toulon_rect_at_zoom_12() {
        // Known-good reference for the Toulon box
        let bounds = GeoBounds::new(43.0, 43.2, 5.8, 6.1).unwrap();
        let rect = to_tile_rect(&bounds, 12).unwrap();

        assert_eq!(rect.min_x, 2113);
        assert_eq!(rect.max_x, 2117);
        assert_eq!(rect.min_y, 1501);
        assert_eq!(rect.max_y, 1505);
        assert_eq!(rect.count(), 25);
    }

    #[test]
    fn test_mediterranee_rect_at_zoom_10() {
        let bounds = GeoBounds::new(42.0, 44.0, 3.0, 7.0).unwrap();
        let rect = to_tile_rect(&bounds, 10).unwrap();

        assert_eq!(rect.min_x, 520);
        assert_eq!(rect.max_x, 531);
        assert_eq!(rect.min_y, 372);
        assert_eq!(rect.max_y, 380);
        assert_eq!(rect.count(), 108);
    }

    #[test]
    fn test_small_box_collapses_to_single_tile() {
        // At zoom 5 the whole Toulon box fits in one tile
        let bounds = GeoBounds::new(43.0, 43.2, 5.8, 6.1).unwrap();
        let rect = to_tile_rect(&bounds, 5).unwrap();

        assert_eq!(rect.min_x, 16);
        assert_eq!(rect.max_x, 16);
        assert_eq!(rect.min_y, 11);
        assert_eq!(rect.max_y, 11);
        assert_eq!(rect.count(), 1);
    }

    #[test]
    fn test_rect_rejects_excessive_zoom() {
        let bounds = GeoBounds::new(43.0, 43.2, 5.8, 6.1).unwrap();
        let result = to_tile_rect(&bounds, 19);
        assert!(matches!(result.unwrap_err(), CoordError::InvalidZoom(19)));
    }

    #[test]
    fn test_inverted_latitude_bounds_rejected() {
        let result = GeoBounds::new(44.0, 42.0, 3.0, 7.0);
        assert!(matches!(
            result.unwrap_err(),
            CoordError::InvalidBounds(_)
        ));
    }

    #[test]
    fn test_inverted_longitude_bounds_rejected() {
        let result = GeoBounds::new(42.0, 44.0, 7.0, 3.0);
        assert!(matches!(
            result.unwrap_err(),
            CoordError::InvalidBounds(_)
        ));
    }

    #[test]
    fn test_bounds_reject_out_of_range_edges() {
        assert!(matches!(
            GeoBounds::new(-90.0, 44.0, 3.0, 7.0).unwrap_err(),
            CoordError::InvalidLatitude(_)
        ));
        assert!(matches!(
            GeoBounds::new(42.0, 44.0, 3.0, 181.0).unwrap_err(),
            CoordError::InvalidLongitude(_)
        ));
    }

    #[test]
    fn test_rect_validates_literal_bounds() {
        // A literally constructed inverted box still fails at projection time
        let bounds = GeoBounds {
            min_lat: 44.0,
            max_lat: 42.0,
            min_lon: 3.0,
            max_lon: 7.0,
        };
        assert!(to_tile_rect(&bounds, 10).is_err());
    }

    // Tile rectangle iterator tests

    #[test]
    fn test_rect_iterator_order() {
        let rect = TileRect {
            min_x: 10,
            max_x: 11,
            min_y: 20,
            max_y: 22,
            zoom: 8,
        };

        let tiles: Vec<_> = rect.tiles().collect();
        assert_eq!(tiles.len(), 6);

        // All rows of the first column, then the next column
        assert_eq!((tiles[0].x, tiles[0].y), (10, 20));
        assert_eq!((tiles[1].x, tiles[1].y), (10, 21));
        assert_eq!((tiles[2].x, tiles[2].y), (10, 22));
        assert_eq!((tiles[3].x, tiles[3].y), (11, 20));
        assert_eq!((tiles[5].x, tiles[5].y), (11, 22));
    }

    #[test]
    fn test_rect_iterator_visits_each_tile_once() {
        let rect = TileRect {
            min_x: 100,
            max_x: 104,
            min_y: 200,
            max_y: 203,
            zoom: 12,
        };

        let mut seen = std::collections::HashSet::new();
        for tile in rect.tiles() {
            assert_eq!(tile.zoom, 12);
            assert!(
                seen.insert((tile.x, tile.y)),
                "Duplicate tile at ({}, {})",
                tile.x,
                tile.y
            );
        }

        assert_eq!(seen.len() as u64, rect.count());
    }

    #[test]
    fn test_rect_iterator_single_tile() {
        let rect = TileRect {
            min_x: 5,
            max_x: 5,
            min_y: 5,
            max_y: 5,
            zoom: 5,
        };

        let tiles: Vec<_> = rect.tiles().collect();
        assert_eq!(tiles.len(), 1);
        assert_eq!((tiles[0].x, tiles[0].y, tiles[0].zoom), (5, 5, 5));
    }

    #[test]
    fn test_rect_iterator_len() {
        let rect = TileRect {
            min_x: 0,
            max_x: 2,
            min_y: 0,
            max_y: 2,
            zoom: 4,
        };

        let mut iter = rect.tiles();
        assert_eq!(iter.len(), 9);
        iter.next();
        assert_eq!(iter.len(), 8);
        assert_eq!(iter.size_hint(), (8, Some(8)));
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_projection_deterministic(
                lat in -85.05..85.05_f64,
                lon in -180.0..180.0_f64,
                zoom in 0u8..=18
            ) {
                let first = to_tile_coords(lat, lon, zoom)?;
                let second = to_tile_coords(lat, lon, zoom)?;
                prop_assert_eq!(first, second);
            }

            #[test]
            fn test_tile_coords_in_bounds(
                lat in -85.05..85.05_f64,
                lon in -180.0..180.0_f64,
                zoom in 0u8..=18
            ) {
                let tile = to_tile_coords(lat, lon, zoom)?;

                // Tile coordinates should be within valid range
                let max_tile = 2u32.pow(zoom as u32);
                prop_assert!(
                    tile.x < max_tile,
                    "X {} exceeds maximum {} at zoom {}",
                    tile.x, max_tile, zoom
                );
                prop_assert!(
                    tile.y < max_tile,
                    "Y {} exceeds maximum {} at zoom {}",
                    tile.y, max_tile, zoom
                );
                prop_assert_eq!(tile.zoom, zoom);
            }

            #[test]
            fn test_rect_corner_order_independent(
                lat_a in -85.0..85.0_f64,
                lat_b in -85.0..85.0_f64,
                lon_a in -180.0..180.0_f64,
                lon_b in -180.0..180.0_f64,
                zoom in 0u8..=14
            ) {
                let bounds = GeoBounds::new(
                    lat_a.min(lat_b),
                    lat_a.max(lat_b),
                    lon_a.min(lon_b),
                    lon_a.max(lon_b),
                )?;

                let rect = to_tile_rect(&bounds, zoom)?;

                // The opposite corner pairing must normalize to the same rectangle
                let sw = to_tile_coords(bounds.min_lat, bounds.min_lon, zoom)?;
                let ne = to_tile_coords(bounds.max_lat, bounds.max_lon, zoom)?;

                prop_assert_eq!(rect.min_x, sw.x.min(ne.x));
                prop_assert_eq!(rect.max_x, sw.x.max(ne.x));
                prop_assert_eq!(rect.min_y, sw.y.min(ne.y));
                prop_assert_eq!(rect.max_y, sw.y.max(ne.y));
            }

            #[test]
            fn test_longitude_monotonic(
                lat in 0.0..1.0_f64,
                lon1 in -180.0..-90.0_f64,
                lon2 in -90.0..0.0_f64,
                zoom in 10u8..=15
            ) {
                // For fixed latitude, increasing longitude should increase X
                let tile1 = to_tile_coords(lat, lon1, zoom)?;
                let tile2 = to_tile_coords(lat, lon2, zoom)?;

                prop_assert!(
                    tile1.x < tile2.x,
                    "Longitude not monotonic: lon {} (x {}) >= lon {} (x {})",
                    lon1, tile1.x, lon2, tile2.x
                );
            }

            #[test]
            fn test_reject_invalid_latitude(
                lat in -90.0..-85.06_f64,
                lon in -180.0..180.0_f64,
                zoom in 0u8..=18
            ) {
                // Latitudes outside Web Mercator range should error
                let result = to_tile_coords(lat, lon, zoom);
                prop_assert!(result.is_err());
                prop_assert!(matches!(result.unwrap_err(), CoordError::InvalidLatitude(_)));
            }

            #[test]
            fn test_reject_invalid_longitude(
                lat in -85.0..85.0_f64,
                lon in 180.01..360.0_f64,
                zoom in 0u8..=18
            ) {
                // Longitudes outside valid range should error
                let result = to_tile_coords(lat, lon, zoom);
                prop_assert!(result.is_err());
                prop_assert!(matches!(result.unwrap_err(), CoordError::InvalidLongitude(_)));
            }

            #[test]
            fn test_rect_iterator_yields_count(
                min_x in 0u32..100,
                width in 1u32..8,
                min_y in 0u32..100,
                height in 1u32..8,
                zoom in 8u8..=18
            ) {
                let rect = TileRect {
                    min_x,
                    max_x: min_x + width - 1,
                    min_y,
                    max_y: min_y + height - 1,
                    zoom,
                };

                prop_assert_eq!(rect.tiles().count() as u64, rect.count());
            }
        }
    }
}
