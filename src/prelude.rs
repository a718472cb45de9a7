//! Exports the boosting driver, the weak learner, and the traits
//! needed to run them.
pub use crate::booster::{
    // Booster trait
    Booster,

    // The outlier-scoring driver and its one-call entry point
    OutlierBoost,
    fit_counts,

    // Sampling machinery
    EmpiricalSampler,
    SamplingDist,
};

pub use crate::weak_learner::{
    // Base learner trait
    WeakLearner,

    // Regression tree learner and its fitted hypothesis
    Node,
    RegressionTree,
    RegressionTreeRegressor,
    SplitPoint,
    best_split,
};

pub use crate::hypothesis::Regressor;

pub use crate::sample::{
    Dataset,
    FloatMatrix,
};

pub use crate::error::{
    Error,
    Result,
};

pub use crate::research::Logger;
