//! Provides the sampling distribution over training rows.
use rand::distributions::WeightedIndex;

use crate::common::{checker, utils};
use crate::error::{Error, Result};

/// A probability distribution over the rows of the training set, used
/// to draw the rows each boosting round trains on.
///
/// The distribution starts uniform. After every public operation the
/// entries are non-negative and sum to one (within floating-point
/// tolerance).
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingDist {
    pmf: Vec<f32>,
}

impl SamplingDist {
    /// Creates a uniform distribution over `n_rows` rows.
    pub fn new(n_rows: usize) -> Self {
        Self { pmf: vec![1f32 / n_rows as f32; n_rows] }
    }

    /// Creates an instance with the given distribution.
    ///
    /// `pmf` must already lie on the probability simplex.
    pub fn from_pmf(pmf: Vec<f32>) -> Self {
        checker::simplex_condition(&pmf[..]);
        Self { pmf }
    }

    /// Number of rows the distribution covers.
    pub fn len(&self) -> usize {
        self.pmf.len()
    }

    /// `true` if the distribution covers no rows.
    pub fn is_empty(&self) -> bool {
        self.pmf.is_empty()
    }

    /// The probability assigned to each row.
    pub fn pmf(&self) -> &[f32] {
        &self.pmf[..]
    }

    /// Return this instance to the uniform distribution.
    fn reset(&mut self) {
        let uni = 1f32 / self.pmf.len() as f32;
        self.pmf.iter_mut().for_each(|p| { *p = uni; });
    }

    /// One round of multiplicative reweighting from a loss vector.
    ///
    /// Let `L = max(loss)` and `e = sum_k pmf[k] * loss[k]`. When the
    /// weighted loss is at least half the maximum (`e >= 0.5 * L`) the
    /// round taught nothing a trivial predictor would not, and the
    /// distribution resets to uniform. Otherwise every entry is scaled
    /// by `b^(1 - loss[k]/L)` with `b = e / (L - e)`, so well-predicted
    /// rows lose mass and persistently hard rows keep it. The result is
    /// normalized either way.
    ///
    /// Returns [`Error::SizeMismatch`] if `loss` and the distribution
    /// differ in length.
    pub fn adjust_for_loss(&mut self, loss: &[f64]) -> Result<()> {
        if loss.len() != self.pmf.len() {
            return Err(Error::SizeMismatch {
                expected: self.pmf.len(),
                got: loss.len(),
            });
        }

        let max_loss = loss.iter()
            .fold(f64::MIN, |acc, &l| l.max(acc));

        let epsilon = self.pmf.iter()
            .zip(loss)
            .map(|(&p, &l)| p as f64 * l)
            .sum::<f64>();

        if epsilon >= 0.5 * max_loss {
            self.reset();
        } else {
            let beta = epsilon / (max_loss - epsilon);
            self.pmf.iter_mut()
                .zip(loss)
                .for_each(|(p, &l)| {
                    let scale = beta.powf(1f64 - l / max_loss);
                    *p = (scale * *p as f64) as f32;
                });
        }
        utils::normalize(&mut self.pmf);

        Ok(())
    }

    /// Materializes the discrete distribution over `0..len()` for
    /// sampling.
    pub fn empirical_dist(&self) -> WeightedIndex<f32> {
        WeightedIndex::new(self.pmf.iter().copied())
            .expect("the pmf must be non-empty with positive total mass")
    }
}
