//! Service configuration and constants

// === Server Defaults ===
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Request bodies above this size are rejected before deserialization.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

// === Embedding Parameters ===
/// Output dimensionality of the embedding.
pub const EMBEDDING_DIM: usize = 2;

/// Initial layout coordinates are drawn uniformly from [-INIT_SCALE, INIT_SCALE].
pub const INIT_SCALE: f32 = 10.0;

// === Neighbor Graph Bounds ===
/// The graph construction requires at least this many neighbors per point.
pub const MIN_NEIGHBORS: usize = 2;

// === Request Defaults ===
/// Library defaults; the reference client always sends explicit values.
pub const DEFAULT_N_NEIGHBORS: usize = 15;
pub const DEFAULT_MIN_DIST: f32 = 0.1;
pub const DEFAULT_SPREAD: f32 = 1.0;
pub const DEFAULT_RANDOM_SEED: u64 = 0;
