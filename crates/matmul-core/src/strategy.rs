//! Multiplication strategy trait.
//!
//! `Multiplier` is the narrow interface every strategy implements. The
//! naive, delegated and Strassen strategies are interchangeable behind it
//! and share only the `Matrix` type and the compatibility contract.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Narrow interface for matrix multiplication strategies.
pub trait Multiplier: Send + Sync {
    /// Multiply `a` by `b`, failing with `DimensionMismatch` when
    /// `a.cols() != b.rows()`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>;

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}
