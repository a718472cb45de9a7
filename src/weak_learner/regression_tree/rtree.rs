//! Provides the regression tree weak learner.
use crate::common::{Scalar, checker};
use crate::common::utils::{mean, variance};
use crate::constants::{DEFAULT_MAX_DEPTH, VARIANCE_FLOOR};
use crate::error::{Error, Result};
use crate::hypothesis::Regressor;
use crate::sample::{Dataset, FloatMatrix};
use crate::weak_learner::WeakLearner;
use crate::weak_learner::regression_tree::{Node, best_split};

use std::fmt;

/// `RegressionTree` is the factory that generates a
/// [`RegressionTreeRegressor`] for a given multiset of training rows.
///
/// The tree is grown by recursive partitioning of the row filter:
/// each node takes the best split over every `(column, value)` pair in
/// scope and hands each child a disjoint sub-slice of the filter. A
/// node becomes a leaf when the depth cap is reached, when the
/// response variance falls below the fixed floor, or when no split
/// separates the rows.
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
/// let tree = RegressionTree::init(6);
/// let mut rows = (0..data.nrow()).collect::<Vec<_>>();
/// let f = tree.produce(&data, &mut rows[..]).unwrap();
///
/// let predictions = f.predict_all(data.xs()).unwrap();
/// assert_eq!(predictions, vec![8.0f32, 2.5, 8.0, 2.5]);
/// ```
pub struct RegressionTree {
    // The maximal depth of the output trees
    max_depth: usize,
}

impl RegressionTree {
    /// Initialize the `RegressionTree` with the given depth cap.
    pub fn init(max_depth: usize) -> Self {
        checker::max_depth(max_depth);
        Self { max_depth }
    }

    /// The depth cap of the produced trees.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn grow<T: Scalar>(
        &self,
        data: &Dataset<T>,
        rows: &mut [usize],
        depth: usize,
    ) -> Result<Node<T>>
    {
        if rows.is_empty() {
            return Err(Error::EmptyRange);
        }

        let prediction = mean(data.ys(), rows)?;
        if !prediction.is_finite() {
            return Err(Error::PredictionNaN);
        }

        let force_leaf = depth >= self.max_depth
            || variance(data.ys(), rows)?.to_f64().unwrap() < VARIANCE_FLOOR;
        if force_leaf {
            return Ok(Node::leaf(prediction));
        }

        let split = best_split(data, rows);
        if !split.is_valid() {
            return Ok(Node::leaf(prediction));
        }

        let pivot = split.partition(data.xs(), rows);
        if pivot == 0 || pivot == rows.len() {
            // the chosen split failed to separate the rows; recursing
            // on the full filter would never terminate
            return Ok(Node::leaf(prediction));
        }

        let (lrows, rrows) = rows.split_at_mut(pivot);
        let (left, right) = rayon::join(
            || self.grow(data, lrows, depth + 1),
            || self.grow(data, rrows, depth + 1),
        );

        Ok(Node::branch(split, Box::new(left?), Box::new(right?), prediction))
    }
}

impl Default for RegressionTree {
    fn default() -> Self {
        Self::init(DEFAULT_MAX_DEPTH)
    }
}

impl<T: Scalar> WeakLearner<T> for RegressionTree {
    type Hypothesis = RegressionTreeRegressor<T>;

    fn name(&self) -> &str {
        "Regression Tree"
    }

    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Variance floor", format!("{VARIANCE_FLOOR}")),
        ]);
        Some(info)
    }

    fn produce(
        &self,
        data: &Dataset<T>,
        filter: &mut [usize],
    ) -> Result<Self::Hypothesis>
    {
        let root = self.grow(data, filter, 0)?;
        Ok(RegressionTreeRegressor::from(root))
    }
}

impl fmt::Display for RegressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "----------\n\
             # Regression Tree Weak Learner\n\n\
             - Max depth: {}\n\
             - Variance floor: {}\n\
             ----------",
            self.max_depth,
            VARIANCE_FLOOR,
        )
    }
}

/// The fitted hypothesis produced by [`RegressionTree`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionTreeRegressor<T> {
    root: Node<T>,
}

impl<T: Scalar> From<Node<T>> for RegressionTreeRegressor<T> {
    fn from(root: Node<T>) -> Self {
        Self { root }
    }
}

impl<T: Scalar> RegressionTreeRegressor<T> {
    /// Number of leaves of the fitted tree.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// The root node.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }
}

impl<T: Scalar> Regressor<T> for RegressionTreeRegressor<T> {
    fn predict(&self, xs: &FloatMatrix<T>, row: usize) -> T {
        self.root.predict(xs, row)
    }

    /// Predicts every row by partitioning a scratch index vector down
    /// the tree, the same scheme the fit uses.
    ///
    /// Returns [`Error::PredictionNaN`] if any row ends up without a
    /// finite prediction; that cannot happen for a tree produced by
    /// [`RegressionTree`].
    fn predict_all(&self, xs: &FloatMatrix<T>) -> Result<Vec<T>> {
        let n_rows = xs.nrow();
        let mut rows = (0..n_rows).collect::<Vec<_>>();
        let mut yhats = vec![T::nan(); n_rows];

        self.root.predict_filter(xs, &mut rows[..], &mut yhats[..]);

        if yhats.iter().any(|yhat| yhat.is_nan()) {
            return Err(Error::PredictionNaN);
        }
        Ok(yhats)
    }
}
