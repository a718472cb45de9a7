//! Provides the trait implemented by fitted hypotheses.
use crate::common::Scalar;
use crate::error::Result;
use crate::sample::FloatMatrix;

/// A trait that defines the behavior of a regressor.
/// You only need to implement the `predict` method.
pub trait Regressor<T: Scalar> {
    /// Predicts the response for the `row`-th row of `xs`.
    fn predict(&self, xs: &FloatMatrix<T>, row: usize) -> T;

    /// Predicts the responses for every row of `xs`.
    fn predict_all(&self, xs: &FloatMatrix<T>) -> Result<Vec<T>> {
        let predictions = (0..xs.nrow())
            .map(|row| self.predict(xs, row))
            .collect::<Vec<_>>();
        Ok(predictions)
    }
}
