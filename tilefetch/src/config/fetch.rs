//! Fetch run configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::defaults::{
    DEFAULT_DELAY_MS, DEFAULT_OUTPUT_ROOT, DEFAULT_TILE_SERVER, DEFAULT_USER_AGENT,
};
use super::settings::ConfigFile;

/// Configuration for a single fetch run.
///
/// Groups all parameters the fetch loop needs, providing sensible
/// defaults while allowing customization.
///
/// # Example
///
/// ```
/// use tilefetch::config::FetchConfig;
///
/// // Using defaults
/// let config = FetchConfig::default();
/// assert_eq!(config.delay_ms(), 500);
///
/// // Custom configuration
/// let config = FetchConfig::new()
///     .with_output_root("/data/tiles")
///     .with_delay_ms(250);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    /// Base URL of the tile server
    server_url: String,
    /// User-Agent header sent with every request
    user_agent: String,
    /// Root directory the tile cache is written under
    output_root: PathBuf,
    /// Pause between consecutive tile downloads (milliseconds)
    delay_ms: u64,
}

impl FetchConfig {
    /// Create a new fetch configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tile server base URL.
    ///
    /// Default: the public OpenStreetMap tile server.
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    /// Set the User-Agent header sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the root directory the tile cache is written under.
    ///
    /// Default: the current directory.
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Set the pause between consecutive tile downloads in milliseconds.
    ///
    /// Default: 500ms, which keeps bulk runs within the public server
    /// usage policy.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Get the tile server base URL.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Get the User-Agent header.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Get the cache output root.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Get the inter-download pause in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Get the inter-download pause as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_TILE_SERVER.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl From<&ConfigFile> for FetchConfig {
    fn from(file: &ConfigFile) -> Self {
        Self {
            server_url: file.server.url.clone(),
            user_agent: file.server.user_agent.clone(),
            output_root: file.cache.directory.clone(),
            delay_ms: file.download.delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.server_url(), DEFAULT_TILE_SERVER);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.output_root(), Path::new(DEFAULT_OUTPUT_ROOT));
        assert_eq!(config.delay_ms(), DEFAULT_DELAY_MS);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(FetchConfig::new(), FetchConfig::default());
    }

    #[test]
    fn test_with_delay_ms() {
        let config = FetchConfig::new().with_delay_ms(250);
        assert_eq!(config.delay_ms(), 250);
        assert_eq!(config.delay(), Duration::from_millis(250));
        assert_eq!(config.server_url(), DEFAULT_TILE_SERVER); // Unchanged
    }

    #[test]
    fn test_builder_chain() {
        let config = FetchConfig::new()
            .with_server_url("https://tiles.example.com")
            .with_user_agent("Survey Tool/0.3")
            .with_output_root("/data/tiles")
            .with_delay_ms(100);

        assert_eq!(config.server_url(), "https://tiles.example.com");
        assert_eq!(config.user_agent(), "Survey Tool/0.3");
        assert_eq!(config.output_root(), Path::new("/data/tiles"));
        assert_eq!(config.delay_ms(), 100);
    }

    #[test]
    fn test_from_config_file() {
        let mut file = ConfigFile::default();
        file.server.url = "https://tiles.example.com".to_string();
        file.cache.directory = PathBuf::from("/data/tiles");
        file.download.delay_ms = 750;

        let config = FetchConfig::from(&file);
        assert_eq!(config.server_url(), "https://tiles.example.com");
        assert_eq!(config.output_root(), Path::new("/data/tiles"));
        assert_eq!(config.delay_ms(), 750);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
    }
}
