//! Provides the split point and the exhaustive best-split search.
use rayon::prelude::*;

use crate::common::Scalar;
use crate::sample::{Dataset, FloatMatrix};

/// A `(feature column, feature value)` pair splitting rows into the
/// side satisfying `xs(row, col) <= value` and the rest.
///
/// A split point is *valid* iff its value is not NaN; the default
/// instance is invalid, which is how [`best_split`] reports that no
/// split exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPoint<T> {
    split_col: usize,
    split_val: T,
}

impl<T: Scalar> Default for SplitPoint<T> {
    fn default() -> Self {
        Self { split_col: 0, split_val: T::nan() }
    }
}

impl<T: Scalar> SplitPoint<T> {
    /// Creates a split at `(split_col, split_val)`.
    pub fn new(split_col: usize, split_val: T) -> Self {
        Self { split_col, split_val }
    }

    /// The zero-based feature column this split tests.
    pub fn split_col(&self) -> usize {
        self.split_col
    }

    /// The feature value this split compares against.
    pub fn split_val(&self) -> T {
        self.split_val
    }

    /// `true` if this instance has a non-NaN split value.
    pub fn is_valid(&self) -> bool {
        !self.split_val.is_nan()
    }

    /// Partitions the row filter in place.
    ///
    /// Rearranges `rows` so that every index with
    /// `xs(row, split_col) <= split_val` precedes every index without,
    /// and returns the position of the first right-side element. The
    /// rearranged slice holds the same multiset of indices it started
    /// with.
    pub fn partition(&self, xs: &FloatMatrix<T>, rows: &mut [usize]) -> usize {
        let mut pivot = 0;
        for i in 0..rows.len() {
            if xs.at(rows[i], self.split_col) <= self.split_val {
                rows.swap(pivot, i);
                pivot += 1;
            }
        }
        pivot
    }
}

/// Finds the split minimizing the total two-sided squared error over
/// every `(column, unique value)` pair derivable from the row filter.
///
/// Columns are scanned in order; the candidate values of a column are
/// evaluated in parallel but reduced in their input order, so the
/// strict `<` comparison makes the first minimum win deterministically.
/// Columns with fewer than two unique values cannot split anything and
/// are skipped; if that leaves no candidate at all, the returned split
/// point is invalid.
pub fn best_split<T: Scalar>(data: &Dataset<T>, rows: &[usize]) -> SplitPoint<T> {
    let mut best = SplitPoint::default();
    let mut best_err = f64::MAX;

    for col in 0..data.ncol() {
        let uniques = data.unique_x(col, rows);
        if uniques.len() < 2 {
            continue;
        }

        let errs = uniques.par_iter()
            .map(|&value| data.total_split_err(col, value, rows))
            .collect::<Vec<_>>();

        for (value, err) in uniques.into_iter().zip(errs) {
            if err < best_err {
                best = SplitPoint::new(col, value);
                best_err = err;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::FloatMatrix;

    fn dataset(xs_flat: Vec<f32>, ys: Vec<f32>) -> Dataset<f32> {
        let xs = FloatMatrix::from_flat(2, xs_flat).unwrap();
        Dataset::new(xs, ys).unwrap()
    }

    #[test]
    fn test_default_is_invalid() {
        let split = SplitPoint::<f32>::default();
        assert!(!split.is_valid());
    }

    #[test]
    fn test_partition_returns_pivot_and_permutation() {
        let xs = FloatMatrix::from_flat(
            1,
            vec![5f32, 1f32, 4f32, 2f32, 3f32],
        ).unwrap();
        let split = SplitPoint::new(0, 2.5f32);

        let mut rows = vec![0, 1, 2, 3, 4];
        let pivot = split.partition(&xs, &mut rows);

        assert_eq!(pivot, 2);
        for &row in &rows[..pivot] {
            assert!(xs.at(row, 0) <= 2.5f32, "row {row} is on the wrong side");
        }
        for &row in &rows[pivot..] {
            assert!(xs.at(row, 0) > 2.5f32, "row {row} is on the wrong side");
        }

        let mut sorted = rows.clone();
        sorted.sort_unstable();
        assert_eq!(
            sorted,
            vec![0, 1, 2, 3, 4],
            "partitioning must permute the filter, not rewrite it",
        );
    }

    #[test]
    fn test_partition_keeps_duplicates() {
        let xs = FloatMatrix::from_flat(1, vec![1f32, 9f32]).unwrap();
        let split = SplitPoint::new(0, 5f32);

        let mut rows = vec![1, 0, 1, 0];
        let pivot = split.partition(&xs, &mut rows);

        assert_eq!(pivot, 2);
        assert_eq!(&rows[..pivot], &[0, 0]);
        assert_eq!(&rows[pivot..], &[1, 1]);
    }

    // perfect split on the second feature; the first is uninformative
    #[test]
    fn test_best_split_perfect() {
        let data = dataset(
            vec![
                1.2f32, 1.2f32, 1.2f32, 1.2f32,
                12.2f32, 2.6f32, 12.2f32, 2.6f32,
            ],
            vec![8f32, 2.5f32, 8f32, 2.5f32],
        );
        let rows = vec![0, 1, 2, 3];
        let split = best_split(&data, &rows);

        assert!(split.is_valid());
        assert_eq!(split.split_col(), 1);
        assert!((split.split_val() - 2.6f32).abs() < 1e-6);
    }

    // the first feature now varies, but still loses to the second
    #[test]
    fn test_best_split_near_perfect() {
        let data = dataset(
            vec![
                1.2f32, 3.4f32, 1.2f32, 1.2f32,
                12.2f32, 2.6f32, 12.2f32, 2.6f32,
            ],
            vec![8f32, 2.5f32, 8f32, 2.5f32],
        );
        let rows = vec![0, 1, 2, 3];
        let split = best_split(&data, &rows);

        assert!(split.is_valid());
        assert_eq!(split.split_col(), 1);
        assert!((split.split_val() - 2.6f32).abs() < 1e-6);
    }

    #[test]
    fn test_best_split_no_candidate() {
        // identical feature rows cannot be separated, whatever the
        // responses do
        let data = dataset(
            vec![
                7f32, 7f32, 7f32, 7f32,
                0.5f32, 0.5f32, 0.5f32, 0.5f32,
            ],
            vec![1f32, -1f32, 1f32, -1f32],
        );
        let rows = vec![0, 1, 2, 3];
        let split = best_split(&data, &rows);
        assert!(!split.is_valid());
    }
}
