//! Range command - run the fetch across an inclusive span of zoom levels.

use std::path::PathBuf;

use clap::Args;
use tracing::{error, info};

use tilefetch::coord::MAX_RANGE_ZOOM;
use tilefetch::fetch::FetchReport;
use tilefetch::zone;

use super::common::run_level;
use crate::error::CliError;
use crate::runner::CliRunner;

const LEVEL_BANNER_WIDTH: usize = 60;

/// Arguments for the range command.
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Built-in zone name (see 'tilefetch zones')
    pub zone: String,

    /// First zoom level to fetch (0-25)
    pub min_zoom: u8,

    /// Last zoom level to fetch, inclusive (0-25)
    pub max_zoom: u8,

    /// Root directory for the tile cache (overrides the configured directory)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pause between requests in milliseconds (overrides the configured delay)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Run the range command.
pub fn run(args: RangeArgs) -> Result<(), CliError> {
    if args.min_zoom > args.max_zoom || args.max_zoom > MAX_RANGE_ZOOM {
        return Err(CliError::InvalidZoomRange {
            min: args.min_zoom,
            max: args.max_zoom,
        });
    }

    let zone = zone::find(&args.zone).ok_or_else(|| CliError::UnknownZone(args.zone.clone()))?;

    let runner = CliRunner::new()?;
    runner.log_startup("range");
    let config = runner.fetch_config(args.output, args.delay_ms);

    println!(
        "Fetching {} from zoom {} to {}",
        zone.display_name(),
        args.min_zoom,
        args.max_zoom
    );

    let failed_levels = run_levels(args.min_zoom, args.max_zoom, |level| {
        info!(zone = zone.name(), level, "starting zoom level");
        run_level(&config, &zone.bounds(), level)
    });

    println!();
    if failed_levels == 0 {
        println!("All zoom levels complete.");
    } else {
        println!(
            "Finished with {} failed zoom level(s). Check the log for details.",
            failed_levels
        );
    }

    Ok(())
}

/// Run `fetch_level` once per zoom level, in increasing order.
///
/// A failing level is reported and skipped; the remaining levels still
/// run. Returns the number of levels that failed.
fn run_levels<F>(min_zoom: u8, max_zoom: u8, mut fetch_level: F) -> u32
where
    F: FnMut(u8) -> Result<FetchReport, CliError>,
{
    let mut failed_levels = 0;
    for level in min_zoom..=max_zoom {
        println!();
        println!("{}", "=".repeat(LEVEL_BANNER_WIDTH));
        println!("ZOOM LEVEL {}/{}", level, max_zoom);
        println!("{}", "=".repeat(LEVEL_BANNER_WIDTH));

        match fetch_level(level) {
            Ok(report) => {
                if report.has_failures() {
                    info!(level, failed = report.failed, "level finished with failures");
                }
            }
            Err(e) => {
                failed_levels += 1;
                error!(level, error = %e, "zoom level failed");
                eprintln!("Zoom level {} failed: {}", level, e);
            }
        }
    }
    failed_levels
}
