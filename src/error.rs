//! Provides the error type shared across the crate.
use thiserror::Error;

/// A specialized `Result` whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building datasets, fitting trees, and boosting.
///
/// Every error is fatal to the in-flight call: the crate never retries,
/// never swallows, and never returns partial output. Callers decide the
/// recovery policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A flat value sequence cannot form a matrix with the requested
    /// number of columns.
    #[error("flat vector of length {len} cannot form a matrix with {ncol} columns")]
    InvalidShape {
        /// Length of the flat value sequence.
        len: usize,
        /// Requested number of columns.
        ncol: usize,
    },

    /// The feature matrix and the response vector disagree on the number
    /// of rows.
    #[error("feature matrix has {xs} rows but the response vector has {ys}")]
    MismatchedRows {
        /// Rows in the feature matrix.
        xs: usize,
        /// Entries in the response vector.
        ys: usize,
    },

    /// Two paired vectors disagree on their length.
    #[error("expected a vector of length {expected}, got {got}")]
    SizeMismatch {
        /// Length the operation requires.
        expected: usize,
        /// Length it received.
        got: usize,
    },

    /// A row filter referenced an index outside the data it filters.
    #[error("row index {row} is out of range for {nrow} rows")]
    RowOutOfRange {
        /// The offending row index.
        row: usize,
        /// Number of rows actually available.
        nrow: usize,
    },

    /// A tree node was fit over an empty row range.
    #[error("cannot fit a tree node over an empty row range")]
    EmptyRange,

    /// Internal arithmetic produced NaN where the invariants forbid it.
    #[error("prediction is NaN")]
    PredictionNaN,

    /// Normalizing the sampling counts produced NaN.
    #[error("normalized count is NaN")]
    NormalizationNaN,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::InvalidShape { len: 7, ncol: 2 };
        assert_eq!(
            e.to_string(),
            "flat vector of length 7 cannot form a matrix with 2 columns",
        );

        let e = Error::RowOutOfRange { row: 9, nrow: 4 };
        assert_eq!(e.to_string(), "row index 9 is out of range for 4 rows");
    }
}
