//! Provides the boosting driver that scores rows by sampling pressure.
use crate::booster::{Booster, EmpiricalSampler, SamplingDist};
use crate::common::{Scalar, checker};
use crate::common::utils::{loss_seq, normalize_counts};
use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_N_ROUNDS};
use crate::error::Result;
use crate::hypothesis::Regressor;
use crate::research::Research;
use crate::sample::{Dataset, FloatMatrix};
use crate::weak_learner::{RegressionTree, WeakLearner};

use std::ops::ControlFlow;

/// Surfaces outlier rows of a labeled dataset by boosting regression
/// trees over it and counting how often each row is drawn into a
/// training sample.
///
/// Each round draws `nrow` rows (with replacement) from the current
/// sampling distribution, fits a tree to the drawn multiset, scores
/// the whole dataset, and reweights the distribution by the
/// multiplicative update of [`SamplingDist::adjust_for_loss`]. Rows
/// the trees keep failing to predict accumulate probability mass and
/// are drawn ever more often; after the final round each row's draw
/// count, normalized by `n_rounds + 1`, is returned as its outlier
/// score.
///
/// The run is deterministic: the same `(seed, dataset, n_rounds,
/// weak learner)` always produces the same scores.
///
/// # Example
/// ```
/// use outboost::prelude::*;
///
/// let xs = FloatMatrix::from_flat(
///     2,
///     vec![1.2f32, 1.2, 1.2, 1.2, 12.2, 2.6, 12.2, 2.6],
/// ).unwrap();
/// let data = Dataset::new(xs, vec![8.0f32, 2.5, 8.0, 2.5]).unwrap();
///
/// let mut booster = OutlierBoost::init(&data)
///     .n_rounds(100)
///     .seed(1480561820);
/// let weak_learner = RegressionTree::init(6);
///
/// let scores = booster.run(&weak_learner).unwrap();
/// assert_eq!(scores.len(), 4);
/// ```
pub struct OutlierBoost<'a, T> {
    // Training data
    data: &'a Dataset<T>,

    // Number of boosting rounds
    n_rounds: usize,

    // Seed for the sampling engine
    seed: u64,

    // Distribution the training rows are drawn from
    pmf: SamplingDist,

    // Seeded sampling engine
    sampler: EmpiricalSampler,

    // How often each row has been drawn so far
    counts: Vec<usize>,
}

impl<'a, T: Scalar> OutlierBoost<'a, T> {
    /// Initialize the `OutlierBoost`.
    /// This method sets some parameters `OutlierBoost` holds.
    pub fn init(data: &'a Dataset<T>) -> Self {
        let n_rows = data.nrow();
        Self {
            data,
            n_rounds: DEFAULT_N_ROUNDS,
            seed: 0,
            pmf: SamplingDist::new(n_rows),
            sampler: EmpiricalSampler::new(0),
            counts: vec![0; n_rows],
        }
    }

    /// Set the number of boosting rounds.
    pub fn n_rounds(mut self, n_rounds: usize) -> Self {
        checker::round_count(n_rounds);
        self.n_rounds = n_rounds;
        self
    }

    /// Set the seed of the sampling engine.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl<T: Scalar> Booster<T> for OutlierBoost<'_, T> {
    type Output = Vec<f32>;

    fn name(&self) -> &str {
        "Outlier Boosting"
    }

    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_rows, n_features) = self.data.shape();
        let info = Vec::from([
            ("# of rows", format!("{n_rows}")),
            ("# of features", format!("{n_features}")),
            ("Rounds", format!("{}", self.n_rounds)),
            ("Seed", format!("{}", self.seed)),
        ]);
        Some(info)
    }

    fn preprocess<W>(&mut self, _weak_learner: &W) -> Result<()>
        where W: WeakLearner<T>,
              W::Hypothesis: Regressor<T>,
    {
        let (n_rows, n_features) = self.data.shape();
        checker::training_set(n_rows, n_features);
        checker::round_count(self.n_rounds);

        self.pmf = SamplingDist::new(n_rows);
        self.sampler = EmpiricalSampler::new(self.seed);
        self.counts = vec![0; n_rows];

        Ok(())
    }

    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> Result<ControlFlow<usize>>
        where W: WeakLearner<T>,
              W::Hypothesis: Regressor<T>,
    {
        if iteration > self.n_rounds {
            return Ok(ControlFlow::Break(self.n_rounds));
        }

        let mut active = self.sampler
            .gen_samples(self.data.nrow(), &self.pmf);

        for &row in &active {
            self.counts[row] += 1;
        }

        let h = weak_learner.produce(self.data, &mut active[..])?;
        let yhats = h.predict_all(self.data.xs())?;
        let loss = loss_seq(self.data.ys(), &yhats[..])?;
        self.pmf.adjust_for_loss(&loss[..])?;

        Ok(ControlFlow::Continue(()))
    }

    fn postprocess<W>(&mut self, _weak_learner: &W) -> Result<Self::Output>
        where W: WeakLearner<T>,
              W::Hypothesis: Regressor<T>,
    {
        normalize_counts(&self.counts[..], self.n_rounds)
    }
}

impl<T: Scalar> Research for OutlierBoost<'_, T> {
    fn current_counts(&self) -> &[usize] {
        &self.counts[..]
    }

    fn current_pmf(&self) -> &[f32] {
        self.pmf.pmf()
    }
}

/// Finds possible outliers in `(xs, ys)` with the default regression
/// tree weak learner.
///
/// Returns one normalized draw count per row: `counts[row] /
/// (n_rounds + 1)`, where `counts[row]` is the number of times the
/// row was drawn into a training sample over the whole run. Larger
/// values mark rows the trees kept failing to predict.
pub fn fit_counts<T: Scalar>(
    xs: FloatMatrix<T>,
    ys: Vec<T>,
    n_rounds: usize,
    seed: u64,
) -> Result<Vec<f32>>
{
    let data = Dataset::new(xs, ys)?;
    let weak_learner = RegressionTree::init(DEFAULT_MAX_DEPTH);

    OutlierBoost::init(&data)
        .n_rounds(n_rounds)
        .seed(seed)
        .run(&weak_learner)
}
