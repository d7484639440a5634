//! Progress reporting for fetch runs.

/// Callback invoked with `(processed, total)` tile counts as a fetch
/// run advances.
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send>;

/// Percentage of processed tiles, rounded to the nearest whole number.
pub fn percent(processed: u64, total: u64) -> u32 {
    if total == 0 {
        return 100;
    }
    ((processed as f64 / total as f64) * 100.0).round() as u32
}
