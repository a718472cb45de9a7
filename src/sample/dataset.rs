//! Provides the dataset binding a feature matrix to its response.
use crate::common::Scalar;
use crate::common::utils::{rolling_mean, sq_err};
use crate::error::{Error, Result};
use crate::sample::FloatMatrix;

/// A feature matrix paired 1:1 with a response vector.
///
/// Construction enforces `xs.nrow() == ys.len()`; afterwards the pair
/// is immutable and shared by every tree task without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    xs: FloatMatrix<T>,
    ys: Vec<T>,
}

impl<T: Scalar> Dataset<T> {
    /// Binds `xs` and `ys` into a dataset.
    ///
    /// Returns [`Error::MismatchedRows`] if the row counts disagree.
    pub fn new(xs: FloatMatrix<T>, ys: Vec<T>) -> Result<Self> {
        if xs.nrow() != ys.len() {
            return Err(Error::MismatchedRows {
                xs: xs.nrow(),
                ys: ys.len(),
            });
        }
        Ok(Self { xs, ys })
    }

    /// The feature matrix.
    pub fn xs(&self) -> &FloatMatrix<T> {
        &self.xs
    }

    /// The response vector.
    pub fn ys(&self) -> &[T] {
        &self.ys[..]
    }

    /// Number of rows.
    pub fn nrow(&self) -> usize {
        self.xs.nrow()
    }

    /// Number of feature columns.
    pub fn ncol(&self) -> usize {
        self.xs.ncol()
    }

    /// Returns the pair of the number of rows and the number of
    /// feature columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.xs.nrow(), self.xs.ncol())
    }

    /// Returns the distinct values of feature `col` over the row
    /// filter, in ascending order.
    ///
    /// Duplicate indices in `rows` do not produce duplicate values.
    pub fn unique_x(&self, col: usize, rows: &[usize]) -> Vec<T> {
        let mut uniques = rows.iter()
            .map(|&row| self.xs.at(row, col))
            .collect::<Vec<_>>();
        uniques.sort_by(|a, b| a.partial_cmp(b).unwrap());
        uniques.dedup();
        uniques
    }

    /// Total squared error of the two-sided partition of the row
    /// filter at `(col, value)`.
    ///
    /// Rows with `xs(row, col) <= value` fall on the left; each side
    /// predicts the rolling mean of its responses, and the per-row
    /// squared errors are summed over both sides. If either side is
    /// empty, or the accumulated error is NaN, the candidate cannot
    /// win a min-selection: the result is `f64::MAX`.
    pub fn total_split_err(
        &self,
        col: usize,
        value: T,
        rows: &[usize],
    ) -> f64
    {
        let is_left = |row: usize| self.xs.at(row, col) <= value;

        let mut yhat_l = 0f64;
        let mut yhat_r = 0f64;
        let mut count_l = 0;
        let mut count_r = 0;

        for &row in rows {
            let y = self.ys[row].to_f64().unwrap();
            if is_left(row) {
                yhat_l = rolling_mean(yhat_l, y, &mut count_l);
            } else {
                yhat_r = rolling_mean(yhat_r, y, &mut count_r);
            }
        }

        if count_l == 0 || count_r == 0 {
            return f64::MAX;
        }

        let err = rows.iter()
            .map(|&row| {
                let y = self.ys[row].to_f64().unwrap();
                let yhat = if is_left(row) { yhat_l } else { yhat_r };
                sq_err(yhat, y)
            })
            .sum::<f64>();

        if err.is_nan() { f64::MAX } else { err }
    }
}
