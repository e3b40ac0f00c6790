//! Nearest-neighbor graphs as returned to clients

use ndarray::Array2;

/// Per-point neighbor indices and distances for one space.
///
/// Both arrays are n × k with rows sorted by ascending distance; the
/// query point itself is never listed among its neighbors.
#[derive(Debug, Clone)]
pub struct NeighborGraph {
	pub indices: Array2<u32>,
	pub distances: Array2<f32>,
}

impl NeighborGraph {
	/// Neighbors per point (columns of both arrays).
	pub fn k(&self) -> usize {
		self.indices.ncols()
	}

	/// Nested-list form for the JSON response.
	pub fn index_rows(&self) -> Vec<Vec<u32>> {
		self.indices.outer_iter().map(|row| row.to_vec()).collect()
	}

	pub fn distance_rows(&self) -> Vec<Vec<f32>> {
		self.distances.outer_iter().map(|row| row.to_vec()).collect()
	}
}
