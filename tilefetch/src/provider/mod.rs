//! Tile server access: HTTP client abstraction and the OSM provider.

mod http;
mod osm;
mod types;

pub use http::{HttpClient, ReqwestClient};
pub use osm::OsmTileProvider;
pub use types::ProviderError;

#[cfg(test)]
pub use http::tests::MockHttpClient;
