//! Multiplication-compatibility check shared by every strategy.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Check that `a * b` is defined, i.e. `a.cols() == b.rows()`.
///
/// Every public multiply entry point calls this before touching the
/// operands, so all strategies fail identically on incompatible input.
pub fn check_compatible(a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}
