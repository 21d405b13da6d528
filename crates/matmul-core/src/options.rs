//! Multiplication options and configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_STRASSEN_THRESHOLD, DEFAULT_TOLERANCE};

/// Options shared by strategy construction and result comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Side length at or below which Strassen delegates to GEMM.
    pub strassen_threshold: usize,
    /// Padded side length from which parallel Strassen forks.
    pub parallel_threshold: usize,
    /// Relative tolerance for cross-strategy comparison.
    pub tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strassen_threshold: DEFAULT_STRASSEN_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    ///
    /// A non-finite or non-positive tolerance also falls back to the default.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.strassen_threshold == 0 {
            self.strassen_threshold = DEFAULT_STRASSEN_THRESHOLD;
        }
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            self.tolerance = DEFAULT_TOLERANCE;
        }
        self
    }
}
