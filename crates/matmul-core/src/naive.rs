//! Triple-loop multiplication.

use tracing::debug;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::strategy::Multiplier;
use crate::validate::check_compatible;

/// Multiply with a plain `i, j, k` loop.
///
/// Each output element accumulates `a[i][k] * b[k][j]` in increasing `k`
/// order starting from `0.0`. No blocking and no zero skipping, so the
/// result is reproducible bit for bit.
pub fn multiply_naive(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    check_compatible(a, b)?;
    debug!(left = %a.shape(), right = %b.shape(), "naive multiply");

    let (n, m, p) = (a.rows(), a.cols(), b.cols());
    let mut result = Matrix::zeros(n, p);
    for i in 0..n {
        for j in 0..p {
            let mut acc = 0.0;
            for k in 0..m {
                acc += a[(i, k)] * b[(k, j)];
            }
            result[(i, j)] = acc;
        }
    }
    Ok(result)
}

/// Naive triple-loop strategy.
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for NaiveMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        multiply_naive(a, b)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
        let c = multiply_naive(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn rectangular_shape() {
        let a = Matrix::filled(3, 4, 1.0);
        let b = Matrix::filled(4, 2, 2.0);
        let c = multiply_naive(&a, &b).unwrap();
        assert_eq!(c.rows(), 3);
        assert_eq!(c.cols(), 2);
        assert!(c.as_slice().iter().all(|&x| x == 8.0));
    }

    #[test]
    fn empty_inner_dimension_gives_zeros() {
        let c = multiply_naive(&Matrix::zeros(2, 0), &Matrix::zeros(0, 3)).unwrap();
        assert_eq!(c, Matrix::zeros(2, 3));
    }

    #[test]
    fn mismatch_is_rejected() {
        let err = multiply_naive(&Matrix::zeros(3, 2), &Matrix::zeros(3, 2));
        assert!(matches!(err, Err(MatrixError::DimensionMismatch { .. })));
    }

    #[test]
    fn nan_propagates() {
        let a = Matrix::from_rows(&[[f64::NAN, 1.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0], [1.0]]).unwrap();
        let c = multiply_naive(&a, &b).unwrap();
        assert!(c[(0, 0)].is_nan());
    }

    #[test]
    fn strategy_name() {
        assert_eq!(NaiveMultiplier::default().name(), "Naive");
    }
}
