//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use std::path::PathBuf;

use super::settings::*;

/// Default tile server (the public OpenStreetMap standard layer).
pub const DEFAULT_TILE_SERVER: &str = "https://tile.openstreetmap.org";

/// Default User-Agent header.
///
/// The public OSM servers reject requests without an identifying
/// User-Agent, so even the default names this tool.
pub const DEFAULT_USER_AGENT: &str = "Tile Downloader/1.0";

/// Default pause between consecutive tile downloads (milliseconds).
///
/// 500ms keeps bulk downloads at two requests per second, within the
/// public server usage policy.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Default output root for the tile cache (the current directory).
pub const DEFAULT_OUTPUT_ROOT: &str = ".";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                url: DEFAULT_TILE_SERVER.to_string(),
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
            cache: CacheSettings {
                directory: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            },
            download: DownloadSettings {
                delay_ms: DEFAULT_DELAY_MS,
            },
        }
    }
}
