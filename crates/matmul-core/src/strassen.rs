//! Strassen's divide-and-conquer multiplication.
//!
//! Operands larger than the threshold are zero-padded to a power-of-two
//! square, split into quadrants and combined from seven recursive products
//! instead of eight. The padded result is trimmed back to
//! `a.rows() x b.cols()`. At or below the threshold the delegated GEMM is
//! used directly.
//!
//! Additions and subtractions are reordered relative to the naive product,
//! so results agree with the other strategies only within a tolerance.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::constants::DEFAULT_STRASSEN_THRESHOLD;
use crate::delegated::gemm;
use crate::error::MatrixError;
use crate::matrix::{Matrix, Shape};
use crate::strategy::Multiplier;
use crate::validate::check_compatible;

/// Multiply with Strassen's algorithm using the default threshold.
pub fn multiply_strassen(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    StrassenMultiplier::default().multiply(a, b)
}

/// Strassen strategy with a tunable base-case threshold.
///
/// With a parallel threshold set, recursion levels whose padded side is at
/// least that large compute their seven products under `rayon::join`.
#[derive(Debug, Clone, Copy)]
pub struct StrassenMultiplier {
    threshold: usize,
    parallel_threshold: Option<usize>,
}

impl StrassenMultiplier {
    /// Sequential Strassen. A threshold of 0 is treated as 1.
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold: threshold.max(1),
            parallel_threshold: None,
        }
    }

    /// Strassen that runs the seven products concurrently once the padded
    /// side reaches `parallel_threshold`.
    #[must_use]
    pub fn parallel(threshold: usize, parallel_threshold: usize) -> Self {
        Self {
            threshold: threshold.max(1),
            parallel_threshold: Some(parallel_threshold),
        }
    }

    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[must_use]
    pub fn parallel_threshold(&self) -> Option<usize> {
        self.parallel_threshold
    }

    /// Number of recursion levels a product of these shapes goes through
    /// before every branch reaches the base case.
    #[must_use]
    pub fn recursion_levels(&self, left: Shape, right: Shape) -> u32 {
        let mut levels = 0;
        let (mut left, mut right) = (left, right);
        while !self.is_base_case(left, right) {
            let side = padded_side(left, right);
            if side <= self.threshold {
                break;
            }
            levels += 1;
            left = Shape::new(side / 2, side / 2);
            right = left;
        }
        levels
    }

    fn is_base_case(&self, left: Shape, right: Shape) -> bool {
        [left.rows, left.cols, right.rows, right.cols]
            .iter()
            .any(|&d| d <= self.threshold)
    }

    fn runs_parallel(&self, side: usize) -> bool {
        self.parallel_threshold.is_some_and(|t| side >= t)
    }

    /// Steps after validation; every recursive product re-enters here.
    fn multiply_unchecked(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        if self.is_base_case(a.shape(), b.shape()) {
            trace!(left = %a.shape(), right = %b.shape(), "strassen base case");
            return gemm(a, b);
        }

        let side = padded_side(a.shape(), b.shape());
        if side <= self.threshold {
            return gemm(a, b);
        }

        let a_pad = pad(a, side);
        let b_pad = pad(b, side);
        let mid = side / 2;
        let aq = Quadrants::split(&a_pad, mid);
        let bq = Quadrants::split(&b_pad, mid);
        drop((a_pad, b_pad));

        let parallel = self.runs_parallel(side);
        trace!(side, mid, parallel, "strassen split");
        let [p1, p2, p3, p4, p5, p6, p7] = self.seven_products(&aq, &bq, parallel)?;

        let c11 = p1.pointwise_add(&p4).pointwise_sub(&p5).pointwise_add(&p7);
        let c12 = p3.pointwise_add(&p5);
        let c21 = p2.pointwise_add(&p4);
        let c22 = p1.pointwise_sub(&p2).pointwise_add(&p3).pointwise_add(&p6);

        let mut result = Matrix::zeros(side, side);
        result.write_block(0, 0, &c11);
        result.write_block(0, mid, &c12);
        result.write_block(mid, 0, &c21);
        result.write_block(mid, mid, &c22);

        if result.shape() == Shape::new(a.rows(), b.cols()) {
            return Ok(result);
        }
        Ok(result.block(0, 0, a.rows(), b.cols()))
    }

    fn seven_products(
        &self,
        a: &Quadrants,
        b: &Quadrants,
        parallel: bool,
    ) -> Result<[Matrix; 7], MatrixError> {
        let p1 = || {
            self.multiply_unchecked(&a.q11.pointwise_add(&a.q22), &b.q11.pointwise_add(&b.q22))
        };
        let p2 = || self.multiply_unchecked(&a.q21.pointwise_add(&a.q22), &b.q11);
        let p3 = || self.multiply_unchecked(&a.q11, &b.q12.pointwise_sub(&b.q22));
        let p4 = || self.multiply_unchecked(&a.q22, &b.q21.pointwise_sub(&b.q11));
        let p5 = || self.multiply_unchecked(&a.q11.pointwise_add(&a.q12), &b.q22);
        let p6 = || {
            self.multiply_unchecked(&a.q21.pointwise_sub(&a.q11), &b.q11.pointwise_add(&b.q12))
        };
        let p7 = || {
            self.multiply_unchecked(&a.q12.pointwise_sub(&a.q22), &b.q21.pointwise_add(&b.q22))
        };

        if parallel {
            let ((r1, r2), ((r3, r4), ((r5, r6), r7))) = rayon::join(
                || rayon::join(p1, p2),
                || {
                    rayon::join(
                        || rayon::join(p3, p4),
                        || rayon::join(|| rayon::join(p5, p6), p7),
                    )
                },
            );
            Ok([r1?, r2?, r3?, r4?, r5?, r6?, r7?])
        } else {
            Ok([p1()?, p2()?, p3()?, p4()?, p5()?, p6()?, p7()?])
        }
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new(DEFAULT_STRASSEN_THRESHOLD)
    }
}

impl Multiplier for StrassenMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        check_compatible(a, b)?;
        debug!(
            left = %a.shape(),
            right = %b.shape(),
            threshold = self.threshold,
            levels = self.recursion_levels(a.shape(), b.shape()),
            "strassen multiply"
        );
        self.multiply_unchecked(a, b)
    }

    fn name(&self) -> &'static str {
        if self.parallel_threshold.is_some() {
            "ParallelStrassen"
        } else {
            "Strassen"
        }
    }
}

/// The four equal blocks of a padded square matrix.
struct Quadrants {
    q11: Matrix,
    q12: Matrix,
    q21: Matrix,
    q22: Matrix,
}

impl Quadrants {
    fn split(m: &Matrix, mid: usize) -> Self {
        Self {
            q11: m.block(0, 0, mid, mid),
            q12: m.block(0, mid, mid, mid),
            q21: m.block(mid, 0, mid, mid),
            q22: m.block(mid, mid, mid, mid),
        }
    }
}

/// Side of the power-of-two square both operands are padded to.
fn padded_side(left: Shape, right: Shape) -> usize {
    left.max_dim().max(right.max_dim()).next_power_of_two()
}

fn pad(m: &Matrix, side: usize) -> Cow<'_, Matrix> {
    if m.shape() == Shape::new(side, side) {
        Cow::Borrowed(m)
    } else {
        Cow::Owned(m.padded(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegated::multiply_delegated;
    use crate::naive::multiply_naive;

    /// Small integer entries keep every intermediate sum exact in `f64`.
    fn int_matrix(rows: usize, cols: usize, salt: usize) -> Matrix {
        Matrix::from_fn(rows, cols, |i, j| {
            #[allow(clippy::cast_precision_loss)]
            let v = ((i * 31 + j * 17 + salt) % 13) as f64;
            v - 6.0
        })
    }

    #[test]
    fn two_by_two_base_case() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
        let c = multiply_strassen(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn two_by_two_full_recursion() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
        let strassen = StrassenMultiplier::new(1);
        assert_eq!(strassen.recursion_levels(a.shape(), b.shape()), 1);
        let c = strassen.multiply(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn all_ones_65_pads_and_recurses_once() {
        let a = Matrix::filled(65, 65, 1.0);
        let strassen = StrassenMultiplier::default();
        assert_eq!(strassen.recursion_levels(a.shape(), a.shape()), 1);

        let c = strassen.multiply(&a, &a).unwrap();
        assert_eq!(c.shape(), Shape::new(65, 65));
        assert!(c.approx_eq(&Matrix::filled(65, 65, 65.0), 1e-9));
        assert!(c.approx_eq(&multiply_delegated(&a, &a).unwrap(), 1e-9));
    }

    #[test]
    fn threshold_boundary_sides() {
        let strassen = StrassenMultiplier::default();
        for n in [63, 64, 65] {
            let a = int_matrix(n, n, 1);
            let b = int_matrix(n, n, 5);
            let expected = multiply_delegated(&a, &b).unwrap();
            let got = strassen.multiply(&a, &b).unwrap();
            assert!(got.approx_eq(&expected, 1e-9), "side {n}");
        }
        let s = |n| Shape::new(n, n);
        assert_eq!(strassen.recursion_levels(s(63), s(63)), 0);
        assert_eq!(strassen.recursion_levels(s(64), s(64)), 0);
        assert_eq!(strassen.recursion_levels(s(65), s(65)), 1);
        assert_eq!(strassen.recursion_levels(s(129), s(129)), 2);
    }

    #[test]
    fn rectangular_non_power_of_two() {
        let strassen = StrassenMultiplier::new(8);
        let a = int_matrix(21, 30, 2);
        let b = int_matrix(30, 19, 9);
        let c = strassen.multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), Shape::new(21, 19));
        assert!(c.approx_eq(&multiply_naive(&a, &b).unwrap(), 1e-9));
    }

    #[test]
    fn small_dimension_takes_base_case() {
        // One side at or below the threshold short-circuits to GEMM.
        let strassen = StrassenMultiplier::new(4);
        let a = int_matrix(40, 3, 0);
        let b = int_matrix(3, 40, 1);
        assert_eq!(strassen.recursion_levels(a.shape(), b.shape()), 0);
        let c = strassen.multiply(&a, &b).unwrap();
        assert!(c.approx_eq(&multiply_naive(&a, &b).unwrap(), 1e-12));
    }

    #[test]
    fn parallel_matches_sequential() {
        let a = int_matrix(50, 50, 3);
        let b = int_matrix(50, 50, 4);
        let seq = StrassenMultiplier::new(4).multiply(&a, &b).unwrap();
        let par = StrassenMultiplier::parallel(4, 1).multiply(&a, &b).unwrap();
        assert!(seq.approx_eq(&par, 1e-12));
        assert_eq!(StrassenMultiplier::parallel(4, 1).name(), "ParallelStrassen");
    }

    #[test]
    fn zero_threshold_is_clamped() {
        let strassen = StrassenMultiplier::new(0);
        assert_eq!(strassen.threshold(), 1);
        let a = int_matrix(5, 3, 0);
        let b = int_matrix(3, 6, 2);
        let c = strassen.multiply(&a, &b).unwrap();
        assert!(c.approx_eq(&multiply_naive(&a, &b).unwrap(), 1e-12));
    }

    #[test]
    fn empty_operands() {
        let c = multiply_strassen(&Matrix::zeros(0, 0), &Matrix::zeros(0, 0)).unwrap();
        assert!(c.is_empty());
        let c = StrassenMultiplier::new(1)
            .multiply(&Matrix::zeros(4, 0), &Matrix::zeros(0, 4))
            .unwrap();
        assert_eq!(c, Matrix::zeros(4, 4));
    }

    #[test]
    fn mismatch_fails_before_work() {
        let err = StrassenMultiplier::new(1).multiply(&Matrix::zeros(3, 2), &Matrix::zeros(3, 2));
        assert!(matches!(err, Err(MatrixError::DimensionMismatch { .. })));
    }

    #[test]
    fn infinity_propagates() {
        let mut a = Matrix::filled(4, 4, 1.0);
        a[(0, 0)] = f64::INFINITY;
        let c = StrassenMultiplier::new(1)
            .multiply(&a, &Matrix::identity(4))
            .unwrap();
        assert!(c[(0, 0)].is_infinite() || c[(0, 0)].is_nan());
    }
}
