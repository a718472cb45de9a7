//! Provides the `Booster` trait and the boosting driver.
use crate::common::Scalar;
use crate::error::Result;
use crate::hypothesis::Regressor;
use crate::weak_learner::WeakLearner;

use std::ops::ControlFlow;

pub mod outlier_boost;
pub mod sampler;
pub mod sampling_dist;

pub use outlier_boost::{OutlierBoost, fit_counts};
pub use sampler::EmpiricalSampler;
pub use sampling_dist::SamplingDist;

/// The trait [`Booster`] defines the standard framework of boosting:
/// a repeated game between **Booster** and **Weak Learner**.
///
/// In each round `t = 1, 2, ...`,
/// 1. Booster chooses a probability distribution over training rows,
/// 2. Weak Learner answers a hypothesis fit to rows drawn from it.
///
/// Unlike a classification booster, the drivers in this crate do not
/// combine the hypotheses; the trees act as probes whose sampling
/// pressure is the output.
///
/// # Required Methods
/// - [`Booster::name`]
/// - [`Booster::preprocess`]
/// - [`Booster::boost`]
/// - [`Booster::postprocess`]
/// - [`Booster::info`] ... optional.
///
/// # Provided Methods
/// - [`Booster::run`]
pub trait Booster<T: Scalar> {
    /// The value output by a full boosting run.
    type Output;

    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;

    /// Returns the information of the boosting algorithm as key/value
    /// pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// A main function that runs the boosting algorithm.
    /// Errors raised by any round abort the run unchanged.
    fn run<W>(&mut self, weak_learner: &W) -> Result<Self::Output>
        where W: WeakLearner<T>,
              W::Hypothesis: Regressor<T>,
    {
        self.preprocess(weak_learner)?;

        let mut iteration = 1;
        loop {
            if self.boost(weak_learner, iteration)?.is_break() {
                break;
            }
            iteration += 1;
        }

        self.postprocess(weak_learner)
    }

    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`],
    /// this method is called before the boosting process.
    fn preprocess<W>(&mut self, weak_learner: &W) -> Result<()>
        where W: WeakLearner<T>,
              W::Hypothesis: Regressor<T>;

    /// Boosting step per iteration.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> Result<ControlFlow<usize>>
        where W: WeakLearner<T>,
              W::Hypothesis: Regressor<T>;

    /// Post-processing.
    fn postprocess<W>(&mut self, weak_learner: &W) -> Result<Self::Output>
        where W: WeakLearner<T>,
              W::Hypothesis: Regressor<T>;
}
