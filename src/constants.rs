//! Numeric tolerances and default parameters.

/// Acceptable deviation of a probability vector from summing to one.
pub const SIMPLEX_TOLERANCE: f64 = 1e-5;

/// Nodes whose filtered response variance falls below this emit a leaf.
pub const VARIANCE_FLOOR: f64 = 1e-6;

/// Default maximal tree depth for the outlier-detection use case.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Default number of boosting rounds.
pub const DEFAULT_N_ROUNDS: usize = 100;
