//! Provides the numeric primitives shared by split search,
//! tree fitting, and the boosting loop.
use rayon::prelude::*;

use crate::common::Scalar;
use crate::error::{Error, Result};

/// Updates a running mean `current` of `count` values after absorbing
/// `next`, incrementing `count`.
///
/// Given the true mean `m` of the first `n` values, returns
/// `m + (next - m) / (n + 1)` and sets `count` to `n + 1`.
#[inline(always)]
pub fn rolling_mean<T: Scalar>(current: T, next: T, count: &mut usize) -> T {
    *count += 1;
    current + (next - current) / T::from(*count).unwrap()
}

/// Computes the mean of `seq[r]` as `r` ranges over the row filter.
///
/// Duplicate indices in `rows` contribute with their multiplicity.
/// Returns `0` for an empty filter and
/// [`Error::RowOutOfRange`] if some index is not in `[0, seq.len())`.
#[inline(always)]
pub fn mean<T: Scalar>(seq: &[T], rows: &[usize]) -> Result<T> {
    let mut total = T::zero();
    let mut count = 0;

    for &row in rows {
        let x = seq.get(row)
            .copied()
            .ok_or(Error::RowOutOfRange { row, nrow: seq.len() })?;
        total = rolling_mean(total, x, &mut count);
    }
    Ok(total)
}

/// Computes the population variance of `seq[r]` as `r` ranges over the
/// row filter, via two passes (mean, then squared deviations).
///
/// Returns NaN for an empty filter and
/// [`Error::RowOutOfRange`] if some index is not in `[0, seq.len())`.
#[inline(always)]
pub fn variance<T: Scalar>(seq: &[T], rows: &[usize]) -> Result<T> {
    if rows.is_empty() {
        return Ok(T::nan());
    }

    // `mean` does the range checking, so the loop below indexes freely.
    let avg = mean(seq, rows)?;
    let total = rows.iter()
        .map(|&row| sq_err(seq[row], avg))
        .sum::<T>();

    Ok(total / T::from(rows.len()).unwrap())
}

/// Squared error of a single prediction.
#[inline(always)]
pub fn sq_err<T: Scalar>(predicted: T, observed: T) -> T {
    (predicted - observed).powi(2)
}

/// Computes the per-row squared error of a prediction vector.
///
/// Returns [`Error::SizeMismatch`] if `ys` and `yhats` differ in length.
#[inline(always)]
pub fn loss_seq<T: Scalar>(ys: &[T], yhats: &[T]) -> Result<Vec<f64>> {
    if ys.len() != yhats.len() {
        return Err(Error::SizeMismatch {
            expected: ys.len(),
            got: yhats.len(),
        });
    }

    let loss = ys.par_iter()
        .zip(yhats)
        .map(|(&y, &yhat)| {
            sq_err(yhat.to_f64().unwrap(), y.to_f64().unwrap())
        })
        .collect();
    Ok(loss)
}

/// Normalizes `pmf` in place so that its entries sum to one.
///
/// The caller must not pass a vector whose sum is zero or non-finite.
#[inline(always)]
pub fn normalize(pmf: &mut [f32]) {
    let norm = pmf.iter()
        .map(|&p| p as f64)
        .sum::<f64>();

    pmf.iter_mut()
        .for_each(|p| { *p = (*p as f64 / norm) as f32; });
}

/// Divides every sampling count by `n_rounds + 1`.
///
/// The `+ 1` in the divisor is contractual: downstream consumers are
/// calibrated against it. Returns [`Error::NormalizationNaN`] if a
/// normalized count is NaN.
#[inline(always)]
pub fn normalize_counts(counts: &[usize], n_rounds: usize) -> Result<Vec<f32>> {
    let divisor = (n_rounds as f64) + 1f64;

    counts.iter()
        .map(|&count| {
            let normalized = count as f64 / divisor;
            if normalized.is_nan() {
                Err(Error::NormalizationNaN)
            } else {
                Ok(normalized as f32)
            }
        })
        .collect()
}

/// Computes the Shannon entropy of a probability vector in nats.
#[inline(always)]
pub fn entropy(pmf: &[f32]) -> f64 {
    pmf.iter()
        .copied()
        .map(|p| p as f64)
        .map(|p| if p == 0f64 { 0f64 } else { -p * p.ln() })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_mean() {
        let mut count = 0;
        let m = rolling_mean(0f64, 4f64, &mut count);
        assert_eq!(m, 4f64, "expected 4, got {m}");
        assert_eq!(count, 1);

        let m = rolling_mean(m, 8f64, &mut count);
        assert_eq!(m, 6f64, "expected 6, got {m}");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_mean() {
        let seq = vec![1f64, 2f64, 3f64, 4f64];
        let rows = vec![0, 1, 2, 3];
        let m = mean(&seq, &rows).unwrap();
        assert!((m - 2.5).abs() < 1e-12, "expected 2.5, got {m}");
    }

    #[test]
    fn test_mean_counts_duplicates() {
        let seq = vec![1f64, 10f64];
        let rows = vec![0, 1, 1];
        let m = mean(&seq, &rows).unwrap();
        assert!((m - 7f64).abs() < 1e-12, "expected 7, got {m}");
    }

    #[test]
    fn test_mean_empty_filter() {
        let seq = vec![1f64, 2f64];
        let m = mean(&seq, &[]).unwrap();
        assert_eq!(m, 0f64, "expected 0 for an empty filter, got {m}");
    }

    #[test]
    fn test_mean_out_of_range() {
        let seq = vec![1f64, 2f64];
        let result = mean(&seq, &[0, 2]);
        assert_eq!(result, Err(Error::RowOutOfRange { row: 2, nrow: 2 }));
    }

    #[test]
    fn test_variance() {
        let seq = vec![2f64, 4f64, 4f64, 4f64, 5f64, 5f64, 7f64, 9f64];
        let rows = (0..seq.len()).collect::<Vec<_>>();
        let v = variance(&seq, &rows).unwrap();
        assert!((v - 4f64).abs() < 1e-12, "expected 4, got {v}");
    }

    #[test]
    fn test_variance_empty_filter() {
        let seq = vec![1f64, 2f64];
        let v = variance(&seq, &[]).unwrap();
        assert!(v.is_nan(), "expected NaN for an empty filter, got {v}");
    }

    #[test]
    fn test_loss_seq() {
        let ys = vec![1f32, 2f32, 3f32];
        let yhats = vec![1f32, 4f32, 0f32];
        let loss = loss_seq(&ys, &yhats).unwrap();
        assert_eq!(loss, vec![0f64, 4f64, 9f64]);
    }

    #[test]
    fn test_loss_seq_size_mismatch() {
        let ys = vec![1f32, 2f32];
        let yhats = vec![1f32];
        let result = loss_seq(&ys, &yhats);
        assert_eq!(result, Err(Error::SizeMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn test_normalize() {
        let mut pmf = vec![2f32, 2f32, 4f32];
        normalize(&mut pmf);
        assert_eq!(pmf, vec![0.25f32, 0.25f32, 0.5f32]);
    }

    #[test]
    fn test_normalize_counts() {
        let counts = vec![3, 0, 1];
        let normalized = normalize_counts(&counts, 3).unwrap();
        assert_eq!(normalized, vec![0.75f32, 0f32, 0.25f32]);
    }

    #[test]
    fn test_entropy_of_uniform() {
        let n = 8;
        let pmf = vec![1f32 / n as f32; n];
        let e = entropy(&pmf);
        let expected = (n as f64).ln();
        assert!(
            (e - expected).abs() < 1e-6,
            "expected {expected}, got {e}",
        );
    }
}
