//! TileFetch - Bulk OpenStreetMap tile downloading with an on-disk cache
//!
//! This library turns a geographic bounding box into the set of Web
//! Mercator tiles covering it, downloads each tile from an
//! OSM-compatible server, and stores it under a cache directory.
//! Already-cached tiles are skipped, so interrupted runs resume where
//! they left off.
//!
//! # Example
//!
//! ```no_run
//! use tilefetch::config::FetchConfig;
//! use tilefetch::coord::{to_tile_rect, GeoBounds};
//! use tilefetch::fetch::TileFetcher;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bounds = GeoBounds::new(43.0, 43.2, 5.8, 6.1)?;
//! let rect = to_tile_rect(&bounds, 12)?;
//!
//! let fetcher = TileFetcher::from_config(&FetchConfig::default())?;
//! let report = fetcher.fetch_all(&rect)?;
//! println!("downloaded {} tiles", report.downloaded);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod coord;
pub mod fetch;
pub mod logging;
pub mod provider;
pub mod zone;

/// Version of the TileFetch library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
