//! Timing helper

use std::time::{Duration, Instant};

/// Run `f` and return its result with the elapsed wall time. The elapsed
/// time is also logged at `info` level under `label`.
///
/// ```
/// let (sum, elapsed) = toolbelt_utils::time_this("sum", || (1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// assert!(elapsed.as_secs() < 60);
/// ```
pub fn time_this<T, F>(label: &str, f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    tracing::info!(label, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "timed");
    (result, elapsed)
}
