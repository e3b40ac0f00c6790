//! Core domain types

pub mod graph;
pub mod matrix;
pub mod variant;

pub use graph::NeighborGraph;
pub use matrix::DataMatrix;
pub use variant::Variant;
