#![warn(missing_docs)]

//!
//! A crate that finds outlier rows in a labeled tabular dataset.
//!
//! The detector runs AdaBoost-style reweighting on top of regression
//! trees: each round draws a multiset of rows from a sampling
//! distribution, fits a tree to the drawn rows, scores the whole
//! dataset, and shifts probability mass toward the rows the tree
//! mispredicted. Rows that successive trees keep failing to predict
//! are drawn ever more often, so their normalized draw counts surface
//! them as outlier candidates.
//!
//! The trees here are diagnostic probes, not additive learners: the
//! output of a run is the per-row draw count, not a combined
//! hypothesis.
//!
//! # Example
//! The following code scores a small dataset whose feature matrix is
//! given as a column-major flat vector.
//!
//! ```
//! use outboost::prelude::*;
//!
//! // Two feature columns, stored column by column.
//! let xs_flat = vec![
//!     1.2f32, 1.2, 1.2, 1.2,
//!     12.2, 2.6, 12.2, 2.6,
//! ];
//! let ys = vec![8.0f32, 2.5, 8.0, 2.5];
//!
//! let xs = FloatMatrix::from_flat(2, xs_flat).unwrap();
//! let scores = fit_counts(xs, ys, 100, 1480561820).unwrap();
//!
//! // One normalized draw count per row; larger means "harder to fit".
//! assert_eq!(scores.len(), 4);
//! ```
//!
//! For finer control, build the driver and the weak learner yourself:
//!
//! ```
//! use outboost::prelude::*;
//!
//! let xs = FloatMatrix::from_flat(1, vec![1.0f64, 2.0, 3.0, 40.0]).unwrap();
//! let data = Dataset::new(xs, vec![1.0f64, 2.0, 3.0, 400.0]).unwrap();
//!
//! let mut booster = OutlierBoost::init(&data)
//!     .n_rounds(500)
//!     .seed(7);
//! let weak_learner = RegressionTree::init(6);
//!
//! let scores = booster.run(&weak_learner).unwrap();
//! assert_eq!(scores.len(), 4);
//! ```
pub mod booster;
pub mod common;
pub mod constants;
pub mod error;
pub mod hypothesis;
pub mod prelude;
pub mod research;
pub mod sample;
pub mod weak_learner;

// Export the training-data containers.
pub use sample::{
    Dataset,
    FloatMatrix,
};

// Export the error type shared across the crate.
pub use error::{
    Error,
    Result,
};

// Export the `Booster` trait and the boosting driver.
pub use booster::{
    Booster,
    EmpiricalSampler,
    OutlierBoost,
    SamplingDist,
    fit_counts,
};

// Export the `WeakLearner` trait and its implementations.
pub use weak_learner::{
    RegressionTree,
    RegressionTreeRegressor,
    WeakLearner,
};

// Export the trait implemented by fitted hypotheses.
pub use hypothesis::Regressor;

pub use research::Logger;
