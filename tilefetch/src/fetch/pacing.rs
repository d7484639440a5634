//! Pacing between consecutive tile downloads.
//!
//! The public OSM servers ask bulk clients to throttle themselves; the
//! fetch loop pauses through a [`Pacer`] between tiles. The trait seam
//! lets tests run the loop without sleeping.

use std::thread;
use std::time::Duration;

/// Strategy for pausing between consecutive tile downloads.
pub trait Pacer: Send + Sync {
    /// Blocks for one inter-download pause.
    fn pause(&self);
}

/// Pacer that sleeps for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Create a pacer sleeping for the given duration between tiles.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create a pacer from a delay in milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Get the configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Pacer for FixedDelay {
    fn pause(&self) {
        thread::sleep(self.delay);
    }
}

/// Pacer that does not pause at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self) {}
}
