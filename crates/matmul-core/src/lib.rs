//! # matmul-core
//!
//! Dense `f64` matrix multiplication behind one contract, with three
//! interchangeable strategies: a naive triple loop, delegation to an
//! optimized GEMM, and Strassen's divide-and-conquer.

pub mod constants;
pub mod delegated;
pub mod error;
pub mod matrix;
pub mod naive;
pub mod options;
pub mod registry;
pub mod strassen;
pub mod strategy;
pub mod validate;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_BENCH_SIZES, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_STRASSEN_THRESHOLD,
    DEFAULT_TOLERANCE,
};
pub use delegated::{multiply_delegated, DelegatedMultiplier};
pub use error::{ConfigError, MatrixError};
pub use matrix::{Matrix, Shape};
pub use naive::{multiply_naive, NaiveMultiplier};
pub use options::Options;
pub use registry::{DefaultFactory, MultiplierFactory};
pub use strassen::{multiply_strassen, StrassenMultiplier};
pub use strategy::Multiplier;
pub use validate::check_compatible;
