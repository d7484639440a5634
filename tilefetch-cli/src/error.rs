//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and a single exit path.

use std::fmt;
use std::process;

use tilefetch::cache::StoreError;
use tilefetch::config::ConfigFileError;
use tilefetch::coord::{CoordError, MAX_RANGE_ZOOM};
use tilefetch::provider::ProviderError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Invalid command-line argument combination
    InvalidArguments(String),
    /// Zone name not found in the built-in table
    UnknownZone(String),
    /// Multi-zoom range is inverted or out of bounds
    InvalidZoomRange { min: u8, max: u8 },
    /// Invalid coordinates, bounds, or zoom level
    Coord(CoordError),
    /// Failed to build the tile fetcher
    Fetcher(ProviderError),
    /// Fatal cache failure during the fetch loop
    Fetch(StoreError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::UnknownZone(_) => {
                eprintln!();
                eprintln!("Run 'tilefetch zones' to list the built-in zones.");
            }
            CliError::InvalidZoomRange { .. } => {
                eprintln!();
                eprintln!(
                    "Zoom levels must satisfy 0 <= min <= max <= {}.",
                    MAX_RANGE_ZOOM
                );
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            CliError::UnknownZone(name) => write!(f, "Unknown zone '{}'", name),
            CliError::InvalidZoomRange { min, max } => {
                write!(f, "Invalid zoom range {}-{}", min, max)
            }
            // CoordError messages are already user-facing ("Invalid latitude: ...")
            CliError::Coord(e) => write!(f, "{}", e),
            CliError::Fetcher(e) => write!(f, "Failed to create fetcher: {}", e),
            CliError::Fetch(e) => write!(f, "Tile fetch failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Coord(e) => Some(e),
            CliError::Fetcher(e) => Some(e),
            CliError::Fetch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coord(e)
    }
}

impl From<ProviderError> for CliError {
    fn from(e: ProviderError) -> Self {
        CliError::Fetcher(e)
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        CliError::Fetch(e)
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}
