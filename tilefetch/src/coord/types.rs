//! Coordinate type definitions

use std::fmt;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Zoom levels accepted by the download path
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 18;

/// Upper bound accepted by the multi-zoom range driver.
///
/// The driver gate is looser than [`MAX_ZOOM`]: levels 19-25 pass the
/// range check but fail per level at projection time.
pub const MAX_RANGE_ZOOM: u8 = 25;

/// Tile coordinates in the Web Mercator / Slippy Map system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// X coordinate (east-west), 0 at the antimeridian
    pub x: u32,
    /// Y coordinate (north-south), 0 at the north edge
    pub y: u32,
    /// Zoom level (0-18)
    pub zoom: u8,
}

/// Geographic bounding box in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Southern edge latitude
    pub min_lat: f64,
    /// Northern edge latitude
    pub max_lat: f64,
    /// Western edge longitude
    pub min_lon: f64,
    /// Eastern edge longitude
    pub max_lon: f64,
}

impl GeoBounds {
    /// Creates a bounding box, validating ranges and ordering.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self, CoordError> {
        let bounds = Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Validates that both edges of each axis are in range and ordered.
    pub fn validate(&self) -> Result<(), CoordError> {
        for lat in [self.min_lat, self.max_lat] {
            if !(MIN_LAT..=MAX_LAT).contains(&lat) {
                return Err(CoordError::InvalidLatitude(lat));
            }
        }
        for lon in [self.min_lon, self.max_lon] {
            if !(MIN_LON..=MAX_LON).contains(&lon) {
                return Err(CoordError::InvalidLongitude(lon));
            }
        }
        if self.min_lat > self.max_lat {
            return Err(CoordError::InvalidBounds(format!(
                "min_lat {} exceeds max_lat {}",
                self.min_lat, self.max_lat
            )));
        }
        if self.min_lon > self.max_lon {
            return Err(CoordError::InvalidBounds(format!(
                "min_lon {} exceeds max_lon {}",
                self.min_lon, self.max_lon
            )));
        }
        Ok(())
    }
}

/// Inclusive rectangle of tile indices at a fixed zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    /// Westernmost tile column
    pub min_x: u32,
    /// Easternmost tile column
    pub max_x: u32,
    /// Northernmost tile row
    pub min_y: u32,
    /// Southernmost tile row
    pub max_y: u32,
    /// Zoom level shared by every tile in the rectangle
    pub zoom: u8,
}

impl TileRect {
    /// Number of tile columns covered.
    #[inline]
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Number of tile rows covered.
    #[inline]
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Total number of tiles in the rectangle.
    #[inline]
    pub fn count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns an iterator over every tile in the rectangle.
    ///
    /// Tiles are yielded column by column: all rows of `min_x` first,
    /// then all rows of `min_x + 1`, and so on.
    #[inline]
    pub fn tiles(&self) -> TileRectIter {
        TileRectIter {
            rect: *self,
            current: 0,
        }
    }
}

/// Iterator over all tiles in a [`TileRect`].
///
/// Yields `count()` tiles in column-major order.
#[derive(Debug, Clone)]
pub struct TileRectIter {
    rect: TileRect,
    current: u64,
}

impl Iterator for TileRectIter {
    type Item = TileCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.rect.count() {
            return None;
        }

        let height = self.rect.height() as u64;
        let x = self.rect.min_x + (self.current / height) as u32;
        let y = self.rect.min_y + (self.current % height) as u32;

        self.current += 1;

        Some(TileCoord {
            x,
            y,
            zoom: self.rect.zoom,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.rect.count() - self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileRectIter {
    fn len(&self) -> usize {
        (self.rect.count() - self.current) as usize
    }
}

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is outside valid range (-85.05112878 to 85.05112878)
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0)
    InvalidLongitude(f64),
    /// Zoom level is outside valid range (0 to 18)
    InvalidZoom(u8),
    /// Bounding box edges are out of order
    InvalidBounds(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            CoordError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
            CoordError::InvalidZoom(zoom) => {
                write!(
                    f,
                    "Invalid zoom level: {} (must be between {} and {})",
                    zoom, MIN_ZOOM, MAX_ZOOM
                )
            }
            CoordError::InvalidBounds(reason) => {
                write!(f, "Invalid bounding box: {}", reason)
            }
        }
    }
}

impl std::error::Error for CoordError {}
