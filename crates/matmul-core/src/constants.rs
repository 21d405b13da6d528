//! Constants for strategy thresholds and configuration.

/// Default side length at or below which Strassen delegates to GEMM.
pub const DEFAULT_STRASSEN_THRESHOLD: usize = 64;

/// Default padded side length from which parallel Strassen runs the seven
/// products concurrently.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Default relative tolerance when comparing products of different strategies.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Matrix sizes benchmarked when none are given.
pub const DEFAULT_BENCH_SIZES: [usize; 3] = [100, 500, 1000];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    // 2 is left to clap for command-line usage errors.
    /// Strategy results did not agree within tolerance.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
