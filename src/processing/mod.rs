//! Numeric pipeline: nearest neighbors and dimensionality reduction

pub mod knn;
pub mod reduce;

pub use knn::nearest_neighbors;
pub use reduce::{reduce, ReduceParams};
