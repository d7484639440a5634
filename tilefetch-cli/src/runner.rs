//! CLI runner for common setup.
//!
//! Encapsulates config loading and logging initialization so every
//! command that downloads tiles starts the same way.

use std::path::PathBuf;

use tracing::info;

use tilefetch::config::{ConfigFile, FetchConfig};
use tilefetch::logging::{default_log_dir, default_log_file, init_logging, LoggingGuard};

use crate::error::CliError;

/// Runner that manages CLI lifecycle and shared state.
pub struct CliRunner {
    /// Logging guard - keeps the file appender flushing while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    pub fn new() -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(&default_log_dir(), default_log_file())
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("tilefetch v{}", tilefetch::VERSION);
        info!("tilefetch CLI: {} command", command);
    }

    /// Build the fetch configuration, applying CLI overrides on top of
    /// the config file values.
    pub fn fetch_config(&self, output: Option<PathBuf>, delay_ms: Option<u64>) -> FetchConfig {
        let mut config = FetchConfig::from(&self.config);
        if let Some(root) = output {
            config = config.with_output_root(root);
        }
        if let Some(delay) = delay_ms {
            config = config.with_delay_ms(delay);
        }
        config
    }
}
