//! Tile fetch orchestration.
//!
//! [`TileFetcher`] walks a tile rectangle, resolving each tile against
//! the cache before touching the network and pacing itself between
//! downloads. Per-tile failures are recorded and the run continues; only
//! a failure to create the cache tree aborts the run.

use tracing::{debug, info, warn};

use crate::cache::{DiskTileStore, StoreError, TileStore};
use crate::config::FetchConfig;
use crate::coord::{TileCoord, TileRect};
use crate::provider::{HttpClient, OsmTileProvider, ProviderError, ReqwestClient};

use super::pacing::{FixedDelay, Pacer};
use super::progress::{percent, ProgressCallback};
use super::report::{FetchOutcome, FetchReport};

/// Batch size above which a run logs a slow-run warning.
///
/// At the default 500ms delay, 500 tiles already take over four minutes.
pub const LARGE_BATCH_THRESHOLD: u64 = 500;

/// Progress is emitted every this many processed tiles.
const PROGRESS_INTERVAL: u64 = 10;

/// Downloads every tile in a rectangle into the cache.
pub struct TileFetcher<C: HttpClient, S: TileStore> {
    provider: OsmTileProvider<C>,
    store: S,
    pacer: Box<dyn Pacer>,
    on_progress: Option<ProgressCallback>,
}

impl<C: HttpClient, S: TileStore> TileFetcher<C, S> {
    /// Create a fetcher from its parts.
    pub fn new(provider: OsmTileProvider<C>, store: S, pacer: Box<dyn Pacer>) -> Self {
        Self {
            provider,
            store,
            pacer,
            on_progress: None,
        }
    }

    /// Attach a progress callback, invoked with `(processed, total)`
    /// every few tiles during [`fetch_all`](Self::fetch_all).
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    /// Get a reference to the underlying tile store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve a single tile.
    ///
    /// Cached tiles are skipped without a request. Download and write
    /// failures are logged and reported as [`FetchOutcome::Failed`];
    /// only a failure to create the cache directories is returned as an
    /// error, since every following tile would hit it too.
    pub fn fetch_one(&self, tile: &TileCoord) -> Result<FetchOutcome, StoreError> {
        if self.store.contains(tile) {
            debug!(x = tile.x, y = tile.y, zoom = tile.zoom, "tile already cached");
            return Ok(FetchOutcome::AlreadyCached);
        }

        let bytes = match self.provider.download_tile(tile) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    x = tile.x,
                    y = tile.y,
                    zoom = tile.zoom,
                    error = %e,
                    "tile download failed"
                );
                return Ok(FetchOutcome::Failed);
            }
        };

        match self.store.put(tile, &bytes) {
            Ok(()) => Ok(FetchOutcome::Downloaded),
            Err(e @ StoreError::Write { .. }) => {
                warn!(
                    x = tile.x,
                    y = tile.y,
                    zoom = tile.zoom,
                    error = %e,
                    "tile store failed"
                );
                Ok(FetchOutcome::Failed)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch every tile in the rectangle, pacing between downloads.
    ///
    /// Tiles are visited column by column. The configured pacer runs
    /// between consecutive tiles but not after the last one.
    pub fn fetch_all(&self, rect: &TileRect) -> Result<FetchReport, StoreError> {
        let total = rect.count();
        let mut report = FetchReport::new(total);

        info!(
            provider = self.provider.name(),
            total,
            zoom = rect.zoom,
            x_min = rect.min_x,
            x_max = rect.max_x,
            y_min = rect.min_y,
            y_max = rect.max_y,
            "starting tile fetch"
        );
        if total > LARGE_BATCH_THRESHOLD {
            warn!(
                total,
                "large batch; the run will take a while at the configured delay"
            );
        }

        for tile in rect.tiles() {
            let outcome = self.fetch_one(&tile)?;
            report.record(outcome);

            if report.processed % PROGRESS_INTERVAL == 0 {
                if let Some(ref callback) = self.on_progress {
                    callback(report.processed, total);
                }
                debug!(
                    processed = report.processed,
                    total,
                    percent = percent(report.processed, total),
                    "fetch progress"
                );
            }

            if report.processed < total {
                self.pacer.pause();
            }
        }

        info!(
            downloaded = report.downloaded,
            cache_hits = report.cache_hits,
            failed = report.failed,
            "tile fetch complete"
        );

        Ok(report)
    }
}

impl TileFetcher<ReqwestClient, DiskTileStore> {
    /// Build a fetcher talking to the configured server and writing to
    /// the configured cache directory.
    pub fn from_config(config: &FetchConfig) -> Result<Self, ProviderError> {
        let client = ReqwestClient::new(config.user_agent())?;
        let provider = OsmTileProvider::with_base_url(client, config.server_url());
        let store = DiskTileStore::new(config.output_root());
        let pacer = FixedDelay::new(config.delay());

        Ok(Self::new(provider, store, Box::new(pacer)))
    }
}
