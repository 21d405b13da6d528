//! Timing helpers for benchmark runs.

use std::time::{Duration, Instant};

/// Run `f` once and return its output with the elapsed wall-clock time.
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Summarize a set of measured durations.
#[must_use]
pub fn summarize(durations: &[Duration]) -> BenchmarkResult {
    let mut sorted = durations.to_vec();
    sorted.sort();
    let min = sorted.first().copied().unwrap_or_default();
    let max = sorted.last().copied().unwrap_or_default();
    let median = match sorted.len() {
        0 => Duration::ZERO,
        len if len % 2 == 1 => sorted[len / 2],
        len => (sorted[len / 2 - 1] + sorted[len / 2]) / 2,
    };
    let iterations = u32::try_from(sorted.len()).unwrap_or(u32::MAX);
    let total: Duration = sorted.iter().sum();
    let mean = if iterations == 0 {
        Duration::ZERO
    } else {
        total / iterations
    };

    BenchmarkResult {
        mean,
        median,
        min,
        max,
        iterations,
    }
}

/// Timing statistics of one strategy on one operand pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BenchmarkResult {
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub iterations: u32,
}
