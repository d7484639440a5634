//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Tile server settings
    pub server: ServerSettings,
    /// Cache settings
    pub cache: CacheSettings,
    /// Download settings
    pub download: DownloadSettings,
}

/// Tile server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Base URL of the tile server (no trailing slash required)
    pub url: String,
    /// User-Agent header sent with every tile request
    pub user_agent: String,
}

/// Cache configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSettings {
    /// Root directory for downloaded tiles; tiles land in `<directory>/map/`
    pub directory: PathBuf,
}

/// Download configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSettings {
    /// Pause between consecutive tile downloads, in milliseconds
    pub delay_ms: u64,
}
