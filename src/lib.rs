//! # umapd Library
//!
//! HTTP service that reduces high-dimensional datasets to a 2D embedding
//! with UMAP and reports k-nearest-neighbor graphs in both the original
//! and the embedded space.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod processing;
