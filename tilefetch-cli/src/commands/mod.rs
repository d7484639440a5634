//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`fetch`] - Single-zoom area download
//! - [`range`] - Multi-zoom driver
//! - [`zones`] - Built-in zone listing

pub mod common;
pub mod config;
pub mod fetch;
pub mod range;
pub mod zones;
