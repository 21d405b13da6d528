//! Error types for matrix construction and multiplication.

use crate::matrix::Shape;

/// Error type for matrix operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MatrixError {
    /// The inner dimensions of a multiplication do not match.
    #[error(
        "dimension mismatch: cannot multiply {left} by {right} (expected {} rows on the right, found {})",
        .left.cols,
        .right.rows
    )]
    DimensionMismatch {
        /// Shape of the left operand.
        left: Shape,
        /// Shape of the right operand.
        right: Shape,
    },

    /// A buffer or row set does not describe a rectangular matrix.
    #[error("invalid shape: {len} elements cannot form a {rows}x{cols} matrix")]
    InvalidShape {
        rows: usize,
        cols: usize,
        len: usize,
    },

    /// The dense backend rejected the matrix layout.
    #[error("layout error: {0}")]
    Layout(#[from] ndarray::ShapeError),
}

impl MatrixError {
    /// Expected inner dimension of a failed multiplication, if any.
    #[must_use]
    pub fn expected_inner(&self) -> Option<usize> {
        match self {
            Self::DimensionMismatch { left, .. } => Some(left.cols),
            _ => None,
        }
    }

    /// Actual inner dimension of a failed multiplication, if any.
    #[must_use]
    pub fn actual_inner(&self) -> Option<usize> {
        match self {
            Self::DimensionMismatch { right, .. } => Some(right.rows),
            _ => None,
        }
    }
}

/// Error raised when selecting or configuring a strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No strategy is registered under this name.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}
