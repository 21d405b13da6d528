//! Dense row-major matrix type shared by every multiplication strategy.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// Row and column count of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of elements a matrix of this shape holds.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Largest of the two dimensions.
    #[must_use]
    pub fn max_dim(&self) -> usize {
        self.rows.max(self.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Dense `f64` matrix stored row-major in a single buffer.
///
/// The buffer always holds exactly `rows * cols` elements, so every row
/// has the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Create a matrix with every element set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Create the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Build a matrix by evaluating `f(row, col)` for every position.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Wrap a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from a slice of rows. Ragged input is rejected.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let len: usize = rows.iter().map(|r| r.as_ref().len()).sum();
        let ragged = rows.iter().any(|r| r.as_ref().len() != cols);
        if ragged || rows.len().checked_mul(cols) != Some(len) {
            return Err(MatrixError::InvalidShape {
                rows: rows.len(),
                cols,
                len,
            });
        }
        let mut data = Vec::with_capacity(len);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// True when the matrix has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Largest absolute element-wise difference, or `None` if the shapes differ.
    #[must_use]
    pub fn max_abs_diff(&self, other: &Self) -> Option<f64> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
        )
    }

    /// Element-wise comparison with a relative tolerance.
    ///
    /// Two elements match when `|x - y| <= tolerance * max(1, |x|, |y|)`.
    /// Identical values (including infinities) and NaN pairs always match.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.data.iter().zip(&other.data).all(|(&x, &y)| {
            if x == y || (x.is_nan() && y.is_nan()) {
                return true;
            }
            let scale = 1.0_f64.max(x.abs()).max(y.abs());
            (x - y).abs() <= tolerance * scale
        })
    }

    pub(crate) fn pointwise_add(&self, other: &Self) -> Self {
        self.zip_with(other, |x, y| x + y)
    }

    pub(crate) fn pointwise_sub(&self, other: &Self) -> Self {
        self.zip_with(other, |x, y| x - y)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&x, &y)| op(x, y))
                .collect(),
        }
    }

    /// Copy the `rows x cols` block whose top-left corner is `(row, col)`.
    pub(crate) fn block(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        debug_assert!(row + rows <= self.rows && col + cols <= self.cols);
        let mut data = Vec::with_capacity(rows * cols);
        for i in row..row + rows {
            let start = i * self.cols + col;
            data.extend_from_slice(&self.data[start..start + cols]);
        }
        Self { rows, cols, data }
    }

    /// Zero-extend to a `side x side` square, keeping the contents top-left.
    pub(crate) fn padded(&self, side: usize) -> Self {
        debug_assert!(side >= self.rows && side >= self.cols);
        let mut out = Self::zeros(side, side);
        out.write_block(0, 0, self);
        out
    }

    /// Overwrite the block starting at `(row, col)` with `src`.
    pub(crate) fn write_block(&mut self, row: usize, col: usize, src: &Self) {
        debug_assert!(row + src.rows <= self.rows && col + src.cols <= self.cols);
        for i in 0..src.rows {
            let dst = (row + i) * self.cols + col;
            self.data[dst..dst + src.cols].copy_from_slice(src.row(i));
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}",
            self.shape()
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}",
            self.shape()
        );
        &mut self.data[row * self.cols + col]
    }
}
