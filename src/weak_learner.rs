//! Provides the `WeakLearner` trait and its implementations.
use crate::common::Scalar;
use crate::error::Result;
use crate::sample::Dataset;

pub mod regression_tree;

pub use regression_tree::{
    Node,
    RegressionTree,
    RegressionTreeRegressor,
    SplitPoint,
    best_split,
};

/// The trait [`WeakLearner`] defines the learner side of the boosting
/// protocol: in each round the booster hands the learner a multiset of
/// row indices drawn from its current sampling distribution, and the
/// learner answers with a hypothesis fit to those rows.
pub trait WeakLearner<T: Scalar> {
    /// The hypothesis this weak learner produces.
    type Hypothesis;

    /// Returns the name of the weak learner.
    fn name(&self) -> &str;

    /// Returns the information of the weak learner as key/value pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// Produces a hypothesis fit to the rows in `filter`.
    ///
    /// `filter` is a multiset: duplicate indices contribute with their
    /// multiplicity. The slice is scratch space owned by the caller;
    /// the learner is free to reorder it.
    fn produce(
        &self,
        data: &Dataset<T>,
        filter: &mut [usize],
    ) -> Result<Self::Hypothesis>;
}
