//! Errors raised by the benchmark harness.

use matmul_core::ConfigError;

/// Error type for benchmark runs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BenchError {
    /// Strategy selection failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Two strategies produced products that differ beyond the tolerance.
    #[error("result mismatch: {left} and {right} differ by up to {max_diff:e}")]
    Mismatch {
        left: String,
        right: String,
        max_diff: f64,
    },

    /// Every strategy failed.
    #[error("no valid results")]
    NoValidResults,
}
