//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::Duration;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info, warn};

use matmul_core::{Matrix, Multiplier, DEFAULT_TOLERANCE};

use crate::error::BenchError;
use crate::generator::random_pair;
use crate::interfaces::{MultiplicationResult, SizeReport};
use crate::runner::{summarize, timed};

/// How a benchmark run is executed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    /// Timed repetitions per strategy and size.
    pub repeats: u32,
    /// Run the strategies of one size concurrently.
    pub concurrent: bool,
    /// Relative tolerance for cross-strategy agreement.
    pub tolerance: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            repeats: 1,
            concurrent: false,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Run every multiplier on `a x b` and collect outcomes with timings.
///
/// Results keep the order of `multipliers` whether or not they ran
/// concurrently.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    a: &Matrix,
    b: &Matrix,
    config: &RunConfig,
) -> Vec<MultiplicationResult> {
    let repeats = config.repeats.max(1);

    if multipliers.len() > 1 && config.concurrent {
        return multipliers
            .par_iter()
            .map(|m| run_one(m.as_ref(), a, b, repeats))
            .collect();
    }

    multipliers
        .iter()
        .map(|m| run_one(m.as_ref(), a, b, repeats))
        .collect()
}

fn run_one(m: &dyn Multiplier, a: &Matrix, b: &Matrix, repeats: u32) -> MultiplicationResult {
    let mut durations: Vec<Duration> = Vec::with_capacity(repeats as usize);
    let (mut outcome, first) = timed(|| m.multiply(a, b));
    durations.push(first);

    // A rejected operand pair fails the same way every time.
    if outcome.is_ok() {
        for _ in 1..repeats {
            let (next, elapsed) = timed(|| m.multiply(a, b));
            durations.push(elapsed);
            outcome = next;
        }
    }

    let timing = summarize(&durations);
    debug!(
        strategy = m.name(),
        ok = outcome.is_ok(),
        elapsed = ?timing.median,
        "multiplication finished"
    );

    MultiplicationResult {
        strategy: m.name().to_string(),
        outcome,
        timing,
    }
}

/// Check that every successful product agrees with the first one.
pub fn analyze_comparison_results(
    results: &[MultiplicationResult],
    tolerance: f64,
) -> Result<(), BenchError> {
    let mut valid = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok().map(|m| (r.strategy.as_str(), m)));

    let Some((first_name, first)) = valid.next() else {
        return Err(BenchError::NoValidResults);
    };

    for (name, product) in valid {
        if !first.approx_eq(product, tolerance) {
            let max_diff = first.max_abs_diff(product).unwrap_or(f64::INFINITY);
            return Err(BenchError::Mismatch {
                left: first_name.to_string(),
                right: name.to_string(),
                max_diff,
            });
        }
    }

    Ok(())
}

/// Benchmark the multipliers on random square operands of one size.
///
/// Operands are seeded from `seed` and the size, so two runs with the
/// same seed multiply the same matrices.
pub fn run_size(
    size: usize,
    multipliers: &[Arc<dyn Multiplier>],
    config: &RunConfig,
    seed: u64,
) -> SizeReport {
    let (a, b) = random_pair(size, seed.wrapping_add(size as u64));
    let results = execute_multiplications(multipliers, &a, &b, config);
    let mismatch = analyze_comparison_results(&results, config.tolerance).err();

    match &mismatch {
        Some(err) => warn!(size, error = %err, "strategies disagree"),
        None => info!(size, strategies = results.len(), "size complete"),
    }

    SizeReport {
        size,
        results,
        mismatch,
    }
}

/// Benchmark every size in order.
pub fn run_benchmark(
    sizes: &[usize],
    multipliers: &[Arc<dyn Multiplier>],
    config: &RunConfig,
    seed: u64,
) -> Vec<SizeReport> {
    sizes
        .iter()
        .map(|&size| run_size(size, multipliers, config, seed))
        .collect()
}
