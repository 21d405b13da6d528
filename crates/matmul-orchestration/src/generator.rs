//! Random operand generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use matmul_core::Matrix;

/// Matrix with entries drawn uniformly from `[0, 1)`.
pub fn random_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
    Matrix::from_fn(rows, cols, |_, _| rng.gen::<f64>())
}

/// Two reproducible `size x size` operands drawn from one stream.
#[must_use]
pub fn random_pair(size: usize, seed: u64) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = random_matrix(size, size, &mut rng);
    let b = random_matrix(size, size, &mut rng);
    (a, b)
}
