//! Provides the regression tree weak learner and its fitted
//! hypothesis.
mod node;
mod rtree;
mod split_rule;

pub use node::Node;
pub use rtree::{RegressionTree, RegressionTreeRegressor};
pub use split_rule::{SplitPoint, best_split};
