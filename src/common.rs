//! Numeric primitives and pre-condition checks.
use num_traits::Float;

use std::fmt;
use std::iter::Sum;

pub mod checker;
pub mod utils;

/// Floating-point scalar usable as a feature or response value.
///
/// Implemented for `f32` and `f64`. The bound collects everything the
/// tree builder and the boosting loop need: float arithmetic, thread
/// safety for the parallel split search, and formatting for messages.
pub trait Scalar: Float + Send + Sync + Sum + fmt::Debug + fmt::Display {}

impl<T> Scalar for T
    where T: Float + Send + Sync + Sum + fmt::Debug + fmt::Display
{}
