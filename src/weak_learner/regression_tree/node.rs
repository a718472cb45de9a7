//! A node struct used in the regression tree algorithm.
use crate::common::Scalar;
use crate::hypothesis::Regressor;
use crate::sample::FloatMatrix;
use crate::weak_learner::regression_tree::SplitPoint;

use std::fmt;

/// A fitted tree node.
///
/// Every node carries the filtered mean of the responses that reached
/// it during fitting; a branch additionally owns its split rule and
/// two children. Children are held by exclusive ownership, so dropping
/// the root drops the whole tree.
#[derive(Clone, PartialEq)]
pub enum Node<T> {
    /// A node that has two children.
    Branch {
        /// The rule directing rows to the children.
        split: SplitPoint<T>,
        /// Subtree for rows satisfying the split rule.
        left: Box<Node<T>>,
        /// Subtree for the remaining rows.
        right: Box<Node<T>>,
        /// Mean response of the rows that reached this node.
        prediction: T,
    },

    /// A node that has no child.
    Leaf {
        /// Mean response of the rows that reached this node.
        prediction: T,
    },
}

impl<T: Scalar> Node<T> {
    /// Constructs a branch node from the given arguments.
    pub fn branch(
        split: SplitPoint<T>,
        left: Box<Node<T>>,
        right: Box<Node<T>>,
        prediction: T,
    ) -> Self
    {
        Self::Branch { split, left, right, prediction }
    }

    /// Constructs a leaf node predicting `prediction`.
    pub fn leaf(prediction: T) -> Self {
        Self::Leaf { prediction }
    }

    /// `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Mean response of the rows that reached this node.
    pub fn prediction(&self) -> T {
        match self {
            Self::Branch { prediction, .. } => *prediction,
            Self::Leaf { prediction } => *prediction,
        }
    }

    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => left.leaves() + right.leaves(),
            Self::Leaf { .. } => 1,
        }
    }

    /// Returns the number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                1 + left.depth().max(right.depth())
            },
            Self::Leaf { .. } => 0,
        }
    }

    /// Writes the prediction of every row in `rows` into `yhats`,
    /// descending by in-place partition.
    ///
    /// `rows` is scratch space owned by the caller; the traversal
    /// reorders it. Each recursion level hands each child a disjoint
    /// sub-slice, so a row's path can never contradict an ancestor
    /// split.
    pub(super) fn predict_filter(
        &self,
        xs: &FloatMatrix<T>,
        rows: &mut [usize],
        yhats: &mut [T],
    )
    {
        match self {
            Self::Leaf { prediction } => {
                for &row in rows.iter() {
                    yhats[row] = *prediction;
                }
            },
            Self::Branch { split, left, right, .. } => {
                let pivot = split.partition(xs, rows);
                let (lrows, rrows) = rows.split_at_mut(pivot);
                left.predict_filter(xs, lrows, yhats);
                right.predict_filter(xs, rrows, yhats);
            },
        }
    }
}

impl<T: Scalar> Regressor<T> for Node<T> {
    fn predict(&self, xs: &FloatMatrix<T>, row: usize) -> T {
        match self {
            Self::Branch { split, left, right, .. } => {
                if xs.at(row, split.split_col()) <= split.split_val() {
                    left.predict(xs, row)
                } else {
                    right.predict(xs, row)
                }
            },
            Self::Leaf { prediction } => *prediction,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { split, left, right, prediction } => {
                f.debug_struct("Branch")
                    .field("split", &split)
                    .field("prediction", &prediction)
                    .field("left", &left)
                    .field("right", &right)
                    .finish()
            },
            Self::Leaf { prediction } => {
                f.debug_struct("Leaf")
                    .field("prediction", &prediction)
                    .finish()
            },
        }
    }
}
