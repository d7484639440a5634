//! Fetch command - download all tiles covering an area at one zoom level.

use std::path::PathBuf;

use clap::Args;

use tilefetch::coord::GeoBounds;
use tilefetch::zone;

use super::common::run_level;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the fetch command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Built-in zone name (see 'tilefetch zones')
    #[arg(long)]
    pub zone: Option<String>,

    /// Zoom level (0-18)
    #[arg(long, default_value_t = 10)]
    pub zoom: u8,

    /// Southern edge of the bounding box in decimal degrees
    #[arg(long, conflicts_with = "zone")]
    pub min_lat: Option<f64>,

    /// Northern edge of the bounding box in decimal degrees
    #[arg(long, conflicts_with = "zone")]
    pub max_lat: Option<f64>,

    /// Western edge of the bounding box in decimal degrees
    #[arg(long, conflicts_with = "zone")]
    pub min_lon: Option<f64>,

    /// Eastern edge of the bounding box in decimal degrees
    #[arg(long, conflicts_with = "zone")]
    pub max_lon: Option<f64>,

    /// Root directory for the tile cache (overrides the configured directory)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pause between requests in milliseconds (overrides the configured delay)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Run the fetch command.
pub fn run(args: FetchArgs) -> Result<(), CliError> {
    let (zone, bounds) = match args.zone {
        Some(ref name) => {
            let zone = zone::find(name).ok_or_else(|| CliError::UnknownZone(name.clone()))?;
            (Some(zone), zone.bounds())
        }
        None => (None, custom_bounds(&args)?),
    };

    let runner = CliRunner::new()?;
    runner.log_startup("fetch");

    println!("Fetching tiles for:");
    if let Some(zone) = zone {
        println!("  Zone: {}", zone.display_name());
    }
    println!(
        "  Bounds: lat {} to {}, lon {} to {}",
        bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
    );
    println!("  Zoom: {}", args.zoom);
    println!();

    let config = runner.fetch_config(args.output, args.delay_ms);
    run_level(&config, &bounds, args.zoom)?;

    Ok(())
}

/// Build a bounding box from the four coordinate flags.
///
/// All four must be present; a partial box is rejected before any
/// download starts.
fn custom_bounds(args: &FetchArgs) -> Result<GeoBounds, CliError> {
    match (args.min_lat, args.max_lat, args.min_lon, args.max_lon) {
        (Some(min_lat), Some(max_lat), Some(min_lon), Some(max_lon)) => {
            Ok(GeoBounds::new(min_lat, max_lat, min_lon, max_lon)?)
        }
        _ => Err(CliError::InvalidArguments(
            "provide either --zone or all of --min-lat, --max-lat, --min-lon and --max-lon"
                .to_string(),
        )),
    }
}
