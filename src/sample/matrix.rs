//! Provides a dense, column-major feature matrix.
use crate::common::Scalar;
use crate::error::{Error, Result};

/// An immutable dense matrix of feature values with shape
/// `(nrow, ncol)`, indexed by `(row, col)`.
///
/// Feature columns are stored contiguously, so the flat value
/// `values[col * nrow + row]` is the entry at `(row, col)`. Callers
/// holding row-major data must transpose before construction.
///
/// The matrix never changes after construction and is shared freely
/// across the parallel tree build.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatMatrix<T> {
    n_rows: usize,
    n_cols: usize,
    values: Vec<T>,
}

impl<T: Scalar> FloatMatrix<T> {
    /// Constructs a matrix from a flat value sequence laid out column
    /// by column.
    ///
    /// Returns [`Error::InvalidShape`] if `values` is non-empty and its
    /// length is not divisible by `n_cols`, or if `values` is empty
    /// while `n_cols > 0`.
    pub fn from_flat(n_cols: usize, values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            if n_cols > 0 {
                return Err(Error::InvalidShape { len: 0, ncol: n_cols });
            }
            return Ok(Self { n_rows: 0, n_cols: 0, values });
        }

        if n_cols == 0 || values.len() % n_cols != 0 {
            return Err(Error::InvalidShape {
                len: values.len(),
                ncol: n_cols,
            });
        }

        let n_rows = values.len() / n_cols;
        Ok(Self { n_rows, n_cols, values })
    }

    /// Number of rows.
    pub fn nrow(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (features).
    pub fn ncol(&self) -> usize {
        self.n_cols
    }

    /// Value at `(row, col)`.
    ///
    /// Out-of-bounds access is a programmer error; it is checked in
    /// debug builds only, since every caller in this crate derives its
    /// indices from the matrix shape.
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        debug_assert!(
            row < self.n_rows && col < self.n_cols,
            "index ({row}, {col}) is out of bounds for a \
             {nr} x {nc} matrix",
            nr = self.n_rows,
            nc = self.n_cols,
        );
        self.values[col * self.n_rows + row]
    }
}
