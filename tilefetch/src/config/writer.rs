//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[server]
; Base URL of the tile server. Any server speaking the standard
; {{z}}/{{x}}/{{y}}.png scheme works (default: https://tile.openstreetmap.org).
; The public OSM standard layer serves zoom levels 0-18.
url = {}
; User-Agent header sent with every tile request.
; The public OSM servers reject anonymous clients; identify your usage here.
user_agent = {}

[cache]
; Root directory for downloaded tiles. Tiles are stored in <directory>/map/
; Supports ~ for the home directory (default: the current directory).
; Example: directory = ~/tiles
directory = {}

[download]
; Pause between consecutive tile downloads in milliseconds (default: 500).
; Keep this at or above 500 to stay within the public server usage policy.
delay_ms = {}
"#,
        config.server.url,
        config.server.user_agent,
        path_to_string(&config.cache.directory),
        config.download.delay_ms,
    )
}

/// Convert path to display string, collapsing home dir to ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
