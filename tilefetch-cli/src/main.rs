//! Tile downloader CLI.
//!
//! This binary provides a command-line interface to the tilefetch library.

mod commands;
mod error;
mod runner;

use clap::{CommandFactory, Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::fetch::FetchArgs;
use commands::range::RangeArgs;

#[derive(Parser)]
#[command(name = "tilefetch")]
#[command(about = "Download and cache OpenStreetMap tiles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download all tiles covering an area at one zoom level
    Fetch(FetchArgs),

    /// Download an area across an inclusive range of zoom levels
    Range(RangeArgs),

    /// List the built-in named zones
    Zones,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Fetch(args)) => commands::fetch::run(args),
        Some(Commands::Range(args)) => commands::range::run(args),
        Some(Commands::Zones) => commands::zones::run(),
        Some(Commands::Config { command }) => commands::config::run(command),
        None => {
            // No subcommand: print help and exit cleanly.
            let _ = Cli::command().print_help();
            Ok(())
        }
    };

    if let Err(e) = result {
        e.exit();
    }
}
