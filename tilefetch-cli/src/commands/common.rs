//! Shared helpers for the fetch and range commands.

use tilefetch::config::FetchConfig;
use tilefetch::coord::{to_tile_rect, GeoBounds};
use tilefetch::fetch::{percent, FetchReport, TileFetcher, LARGE_BATCH_THRESHOLD};

use crate::error::CliError;

/// Download every tile covering `bounds` at a single zoom level.
///
/// Prints the tile-count summary and periodic progress, then returns the
/// final report. Zoom and bounds validation happens here, before any
/// network client is built.
pub fn run_level(
    config: &FetchConfig,
    bounds: &GeoBounds,
    zoom: u8,
) -> Result<FetchReport, CliError> {
    let rect = to_tile_rect(bounds, zoom)?;
    let total = rect.count();

    println!(
        "{} tiles to fetch (x {}-{}, y {}-{})",
        total, rect.min_x, rect.max_x, rect.min_y, rect.max_y
    );

    if total > LARGE_BATCH_THRESHOLD {
        println!(
            "Warning: {} tiles is a large batch. Consider a smaller area or a lower zoom level.",
            total
        );
    }

    let fetcher = TileFetcher::from_config(config)?.with_progress(Box::new(|processed, total| {
        println!(
            "Progress: {}/{} ({}%)",
            processed,
            total,
            percent(processed, total)
        );
    }));

    let report = fetcher.fetch_all(&rect)?;

    println!(
        "Done: {} processed, {} downloaded, {} already cached, {} failed",
        report.processed, report.downloaded, report.cache_hits, report.failed
    );

    Ok(report)
}
