//! User configuration: the `~/.tilefetch/config.ini` file and the
//! per-run [`FetchConfig`].
//!
//! The INI file is split across focused submodules: settings structs in
//! [`settings`], constants in [`defaults`], parsing in [`parser`],
//! serialization in [`writer`], and file I/O in [`file`]. Key-based
//! access for the `config get`/`config set` commands lives in [`keys`].

mod defaults;
mod fetch;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    DEFAULT_DELAY_MS, DEFAULT_OUTPUT_ROOT, DEFAULT_TILE_SERVER, DEFAULT_USER_AGENT,
};
pub use fetch::FetchConfig;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{CacheSettings, ConfigFile, DownloadSettings, ServerSettings};
