//! Bulk tile fetching.
//!
//! This module provides the fetch loop that fills the cache from a tile
//! server:
//! - High-level orchestration and per-tile resolution (`fetcher`)
//! - Inter-download pacing (`pacing`)
//! - Progress reporting (`progress`)
//! - Run accounting (`report`)
//!
//! # Architecture
//!
//! ```text
//! TileFetcher (orchestrator)
//!         │
//!         ├── OsmTileProvider (downloads tiles)
//!         │
//!         ├── TileStore (cache lookup and storage)
//!         │
//!         ├── Pacer (trait)
//!         │       ├── FixedDelay
//!         │       └── NoDelay
//!         │
//!         └── FetchReport (tracks outcomes)
//! ```

mod fetcher;
mod pacing;
mod progress;
mod report;

pub use fetcher::{TileFetcher, LARGE_BATCH_THRESHOLD};
pub use pacing::{FixedDelay, NoDelay, Pacer};
pub use progress::{percent, ProgressCallback};
pub use report::{FetchOutcome, FetchReport};
