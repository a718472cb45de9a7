//! This file defines some functions that check pre-conditions
//! E.g., number of rounds, shape of data
use crate::constants::SIMPLEX_TOLERANCE;

/// Check whether the training set is non-degenerate.
#[inline(always)]
pub fn training_set(n_rows: usize, n_features: usize) {
    assert!(
        n_rows > 0,
        "the training set must have at least one row."
    );
    assert!(
        n_features > 0,
        "the training set must have at least one feature column."
    );
}

/// Check whether the number of boosting rounds is valid.
#[inline(always)]
pub fn round_count(n_rounds: usize) {
    assert!(
        n_rounds > 0,
        "the number of boosting rounds must be positive. got {n_rounds}."
    );
}

/// Check whether the maximal tree depth is valid.
#[inline(always)]
pub fn max_depth(depth: usize) {
    assert!(
        depth > 0,
        "the maximal tree depth must be positive. got {depth}."
    );
}

/// Check whether `pmf` lies on the probability simplex.
#[inline(always)]
pub fn simplex_condition(pmf: &[f32]) {
    let sum = pmf.iter()
        .map(|&p| p as f64)
        .sum::<f64>();
    assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE,
        "sum(pmf[..]) = {sum}"
    );
    assert!(
        pmf.iter().all(|&p| p >= 0f32),
        "all entries of a pmf must be non-negative. pmf = {pmf:?}"
    );
}
