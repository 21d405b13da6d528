//! Orchestration interfaces.

use std::time::Duration;

use matmul_core::{Matrix, MatrixError};

use crate::error::BenchError;
use crate::runner::BenchmarkResult;

/// Trait for presenting benchmark results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the results of one operand size.
    fn present_size(&self, report: &SizeReport);

    /// Present a closing summary over every size.
    fn present_summary(&self, reports: &[SizeReport]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of running one strategy on one operand pair.
#[derive(Debug, Clone)]
pub struct MultiplicationResult {
    /// Strategy name.
    pub strategy: String,
    /// The product or a structured error.
    pub outcome: Result<Matrix, MatrixError>,
    /// Timing statistics over the measured repetitions.
    pub timing: BenchmarkResult,
}

impl MultiplicationResult {
    /// Representative duration (the median repetition).
    pub fn duration(&self) -> Duration {
        self.timing.median
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// All strategy results for one benchmark size.
#[derive(Debug, Clone)]
pub struct SizeReport {
    /// Side length of the square operands.
    pub size: usize,
    pub results: Vec<MultiplicationResult>,
    /// Set when the strategies disagreed or none succeeded.
    pub mismatch: Option<BenchError>,
}

impl SizeReport {
    /// Fastest successful strategy, if any.
    pub fn fastest(&self) -> Option<&MultiplicationResult> {
        self.results
            .iter()
            .filter(|r| r.is_ok())
            .min_by_key(|r| r.duration())
    }

    pub fn is_consistent(&self) -> bool {
        self.mismatch.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, millis: u64, ok: bool) -> MultiplicationResult {
        let d = Duration::from_millis(millis);
        MultiplicationResult {
            strategy: name.into(),
            outcome: if ok {
                Ok(Matrix::zeros(1, 1))
            } else {
                Err(MatrixError::InvalidShape {
                    rows: 1,
                    cols: 1,
                    len: 0,
                })
            },
            timing: BenchmarkResult {
                mean: d,
                median: d,
                min: d,
                max: d,
                iterations: 1,
            },
        }
    }

    #[test]
    fn fastest_skips_failures() {
        let report = SizeReport {
            size: 1,
            results: vec![
                result("Naive", 30, true),
                result("Broken", 1, false),
                result("Delegated", 10, true),
            ],
            mismatch: None,
        };
        assert_eq!(report.fastest().map(|r| r.strategy.as_str()), Some("Delegated"));
        assert!(report.is_consistent());
    }

    #[test]
    fn fastest_none_when_all_fail() {
        let report = SizeReport {
            size: 1,
            results: vec![result("Broken", 1, false)],
            mismatch: Some(BenchError::NoValidResults),
        };
        assert!(report.fastest().is_none());
        assert!(!report.is_consistent());
    }
}
