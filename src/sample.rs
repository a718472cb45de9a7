//! Provides the training-data containers:
//! a dense feature matrix and the dataset binding it to a response.
pub mod dataset;
pub mod matrix;

pub use dataset::Dataset;
pub use matrix::FloatMatrix;
