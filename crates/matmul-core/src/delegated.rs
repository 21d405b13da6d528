//! Multiplication delegated to ndarray's GEMM.
//!
//! `general_mat_mul` dispatches to the `matrixmultiply` BLIS-style kernels,
//! which serve as the reference result for the other strategies and as the
//! Strassen base case.

use ndarray::linalg::general_mat_mul;
use ndarray::{ArrayView2, ArrayViewMut2};
use tracing::debug;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::strategy::Multiplier;
use crate::validate::check_compatible;

/// Multiply using the optimized dense GEMM primitive.
pub fn multiply_delegated(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    check_compatible(a, b)?;
    debug!(left = %a.shape(), right = %b.shape(), "delegated multiply");
    gemm(a, b)
}

/// GEMM without validation; callers must have checked compatibility.
pub(crate) fn gemm(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    let mut result = Matrix::zeros(a.rows(), b.cols());
    if a.is_empty() || b.is_empty() {
        return Ok(result);
    }

    let lhs = ArrayView2::from_shape((a.rows(), a.cols()), a.as_slice())?;
    let rhs = ArrayView2::from_shape((b.rows(), b.cols()), b.as_slice())?;
    let (rows, cols) = (result.rows(), result.cols());
    let mut out = ArrayViewMut2::from_shape((rows, cols), result.as_mut_slice())?;
    general_mat_mul(1.0, &lhs, &rhs, 0.0, &mut out);
    Ok(result)
}

/// Strategy backed by `multiply_delegated`.
pub struct DelegatedMultiplier;

impl DelegatedMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DelegatedMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for DelegatedMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        multiply_delegated(a, b)
    }

    fn name(&self) -> &'static str {
        "Delegated"
    }
}
