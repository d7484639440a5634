//! OpenStreetMap raster tile provider.
//!
//! Downloads standard-layer PNG tiles from an OSM-compatible tile
//! server. The default endpoint is the public openstreetmap.org
//! server, which caps the standard layer at zoom 18; any server
//! speaking the `{z}/{x}/{y}.png` URL scheme can be substituted.
//!
//! The public servers enforce a usage policy (identifying User-Agent,
//! throttled request rate). The `User-Agent` is the HTTP client's
//! concern; pacing between requests is the fetch loop's.

use crate::config::DEFAULT_TILE_SERVER;
use crate::coord::{TileCoord, MAX_ZOOM};
use crate::provider::{HttpClient, ProviderError};

/// Tile provider for OSM-compatible servers.
pub struct OsmTileProvider<C: HttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: HttpClient> OsmTileProvider<C> {
    /// Creates a provider pointing at the public OSM tile server.
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, DEFAULT_TILE_SERVER)
    }

    /// Creates a provider pointing at a custom tile server.
    ///
    /// A trailing slash on the base URL is trimmed so the generated
    /// tile URLs never contain a double slash.
    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Builds the tile URL for the given coordinates.
    fn build_url(&self, tile: &TileCoord) -> String {
        format!(
            "{}/{}/{}/{}.png",
            self.base_url, tile.zoom, tile.x, tile.y
        )
    }

    /// Downloads a single tile as PNG bytes.
    pub fn download_tile(&self, tile: &TileCoord) -> Result<Vec<u8>, ProviderError> {
        if tile.zoom > MAX_ZOOM {
            return Err(ProviderError::UnsupportedZoom(tile.zoom));
        }

        let url = self.build_url(tile);
        self.http_client.get(&url)
    }

    /// Returns the provider's name for logging and identification.
    pub fn name(&self) -> &str {
        "OpenStreetMap"
    }

    /// Returns the maximum zoom level the standard layer serves.
    pub fn max_zoom(&self) -> u8 {
        MAX_ZOOM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockHttpClient;

    fn mock_ok() -> MockHttpClient {
        MockHttpClient {
            response: Ok(vec![]),
        }
    }

    #[test]
    fn test_provider_name() {
        let provider = OsmTileProvider::new(mock_ok());
        assert_eq!(provider.name(), "OpenStreetMap");
    }

    #[test]
    fn test_default_url_construction() {
        let provider = OsmTileProvider::new(mock_ok());
        let tile = TileCoord {
            x: 2113,
            y: 1501,
            zoom: 12,
        };

        assert_eq!(
            provider.build_url(&tile),
            "https://tile.openstreetmap.org/12/2113/1501.png"
        );
    }

    #[test]
    fn test_custom_base_url() {
        let provider =
            OsmTileProvider::with_base_url(mock_ok(), "https://tiles.example.com/osm");
        let tile = TileCoord { x: 1, y: 2, zoom: 3 };

        assert_eq!(
            provider.build_url(&tile),
            "https://tiles.example.com/osm/3/1/2.png"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let provider = OsmTileProvider::with_base_url(mock_ok(), "https://tiles.example.com/");
        let tile = TileCoord { x: 0, y: 0, zoom: 0 };

        assert_eq!(provider.build_url(&tile), "https://tiles.example.com/0/0/0.png");
    }

    #[test]
    fn test_download_tile_success() {
        let mock_data = vec![1, 2, 3, 4];
        let mock_client = MockHttpClient {
            response: Ok(mock_data.clone()),
        };
        let provider = OsmTileProvider::new(mock_client);
        let tile = TileCoord {
            x: 528,
            y: 375,
            zoom: 10,
        };

        let result = provider.download_tile(&tile);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), mock_data);
    }

    #[test]
    fn test_download_tile_http_error() {
        let mock_client = MockHttpClient {
            response: Err(ProviderError::HttpError("Network error".to_string())),
        };
        let provider = OsmTileProvider::new(mock_client);
        let tile = TileCoord { x: 0, y: 0, zoom: 1 };

        match provider.download_tile(&tile) {
            Err(ProviderError::HttpError(msg)) => assert_eq!(msg, "Network error"),
            _ => panic!("Expected HttpError"),
        }
    }

    #[test]
    fn test_download_tile_unsupported_zoom() {
        let provider = OsmTileProvider::new(mock_ok());
        let tile = TileCoord { x: 0, y: 0, zoom: 19 };

        match provider.download_tile(&tile) {
            Err(ProviderError::UnsupportedZoom(zoom)) => assert_eq!(zoom, 19),
            _ => panic!("Expected UnsupportedZoom error"),
        }
    }

    #[test]
    fn test_max_zoom() {
        let provider = OsmTileProvider::new(mock_ok());
        assert_eq!(provider.max_zoom(), 18);
    }
}
