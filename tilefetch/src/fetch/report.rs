//! Fetch run accounting.
//!
//! Tracks how many tiles a run processed and how each one ended:
//! freshly downloaded, already in the cache, or failed.

/// How a single tile was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Tile was downloaded from the server and stored.
    Downloaded,
    /// Tile was already in the cache; no request was made.
    AlreadyCached,
    /// Download or store failed; the tile is absent from the cache.
    Failed,
}

/// Accumulated counts for a fetch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    /// Total number of tiles in the run.
    pub total: u64,
    /// Number of tiles processed so far.
    pub processed: u64,
    /// Tiles downloaded from the server.
    pub downloaded: u64,
    /// Tiles skipped because they were already cached.
    pub cache_hits: u64,
    /// Tiles that failed to download or store.
    pub failed: u64,
}

impl FetchReport {
    /// Create a report for a run over the given number of tiles.
    pub fn new(total: u64) -> Self {
        Self {
            total,
            processed: 0,
            downloaded: 0,
            cache_hits: 0,
            failed: 0,
        }
    }

    /// Record the outcome of one tile.
    pub fn record(&mut self, outcome: FetchOutcome) {
        self.processed += 1;
        match outcome {
            FetchOutcome::Downloaded => self.downloaded += 1,
            FetchOutcome::AlreadyCached => self.cache_hits += 1,
            FetchOutcome::Failed => self.failed += 1,
        }
    }

    /// Check if every tile in the run has been processed.
    pub fn is_complete(&self) -> bool {
        self.processed == self.total
    }

    /// Check if any tiles failed.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_new() {
        let report = FetchReport::new(25);

        assert_eq!(report.total, 25);
        assert_eq!(report.processed, 0);
        assert!(!report.is_complete());
        assert!(!report.has_failures());
    }

    #[test]
    fn test_report_record_each_outcome() {
        let mut report = FetchReport::new(3);

        report.record(FetchOutcome::Downloaded);
        report.record(FetchOutcome::AlreadyCached);
        report.record(FetchOutcome::Failed);

        assert_eq!(report.processed, 3);
        assert_eq!(report.downloaded, 1);
        assert_eq!(report.cache_hits, 1);
        assert_eq!(report.failed, 1);
        assert!(report.is_complete());
        assert!(report.has_failures());
    }

    #[test]
    fn test_report_is_complete() {
        let mut report = FetchReport::new(2);

        report.record(FetchOutcome::Downloaded);
        assert!(!report.is_complete());

        report.record(FetchOutcome::Downloaded);
        assert!(report.is_complete());
    }
}
