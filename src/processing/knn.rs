//! Brute-force k-nearest neighbors

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

use crate::core::NeighborGraph;

/// Compute the k nearest neighbors of every row under Euclidean distance.
///
/// Exact brute force, parallelized over query points. Accurate in high
/// dimensions and plenty fast for the dataset sizes this service sees.
/// The query point is excluded from its own neighbor list; `k` is
/// clamped to `n - 1` when fewer neighbors exist.
pub fn nearest_neighbors(data: ArrayView2<'_, f32>, k: usize) -> NeighborGraph {
	let n = data.nrows();
	if n == 0 {
		return NeighborGraph {
			indices: Array2::<u32>::zeros((0, 0)),
			distances: Array2::<f32>::zeros((0, 0)),
		};
	}

	let k = k.min(n - 1);

	let rows: Vec<(Vec<u32>, Vec<f32>)> = (0..n)
		.into_par_iter()
		.map(|i| {
			let mut candidates: Vec<(u32, f32)> = (0..n)
				.filter(|&j| j != i)
				.map(|j| (j as u32, euclidean(data.row(i), data.row(j))))
				.collect();

			candidates.sort_by(|a, b| f32::total_cmp(&a.1, &b.1));
			candidates.truncate(k);

			let indices = candidates.iter().map(|&(j, _)| j).collect();
			let dists = candidates.iter().map(|&(_, d)| d).collect();
			(indices, dists)
		})
		.collect();

	let mut indices = Array2::<u32>::zeros((n, k));
	let mut distances = Array2::<f32>::zeros((n, k));
	for (i, (idx, dist)) in rows.iter().enumerate() {
		for j in 0..k {
			indices[[i, j]] = idx[j];
			distances[[i, j]] = dist[j];
		}
	}

	NeighborGraph { indices, distances }
}

fn euclidean(a: ndarray::ArrayView1<'_, f32>, b: ndarray::ArrayView1<'_, f32>) -> f32 {
	a.iter()
		.zip(b.iter())
		.map(|(x, y)| (x - y) * (x - y))
		.sum::<f32>()
		.sqrt()
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use ndarray::array;

	#[test]
	fn empty_input_gives_empty_graph() {
		let data = Array2::<f32>::zeros((0, 8));
		let graph = nearest_neighbors(data.view(), 5);
		assert_eq!(graph.indices.shape(), &[0, 0]);
		assert_eq!(graph.distances.shape(), &[0, 0]);
	}

	#[test]
	fn single_point_has_no_neighbors() {
		let data = array![[1.0f32, 0.0, 0.0]];
		let graph = nearest_neighbors(data.view(), 3);
		assert_eq!(graph.indices.shape(), &[1, 0]);
	}

	#[test]
	fn k_is_clamped_to_available_neighbors() {
		let data = array![[0.0f32], [1.0], [2.0]];
		let graph = nearest_neighbors(data.view(), 10);
		assert_eq!(graph.indices.shape(), &[3, 2]);
		assert!(graph.indices.iter().all(|&j| j < 3));
	}

	#[test]
	fn finds_nearest_in_order() {
		let data = array![
			[0.0f32, 0.0],
			[1.0, 0.0],
			[3.0, 0.0],
			[0.0, 5.0],
		];
		let graph = nearest_neighbors(data.view(), 2);

		// Point 0: closest is 1 (d=1), then 2 (d=3)
		assert_eq!(graph.indices.row(0).to_vec(), vec![1, 2]);
		assert_relative_eq!(graph.distances[[0, 0]], 1.0);
		assert_relative_eq!(graph.distances[[0, 1]], 3.0);

		// Point 2: closest is 1 (d=2), then 0 (d=3)
		assert_eq!(graph.indices.row(2).to_vec(), vec![1, 0]);
		assert_relative_eq!(graph.distances[[2, 0]], 2.0);
	}

	#[test]
	fn rows_are_sorted_ascending() {
		let data = array![
			[0.0f32, 0.0],
			[0.5, 0.5],
			[2.0, 2.0],
			[-1.0, 4.0],
			[3.0, -2.0],
		];
		let graph = nearest_neighbors(data.view(), 4);
		for row in graph.distances.outer_iter() {
			for w in row.to_vec().windows(2) {
				assert!(w[0] <= w[1]);
			}
		}
	}

	#[test]
	fn never_lists_self() {
		let data = array![[0.0f32, 0.0], [0.0, 0.0], [1.0, 1.0]];
		let graph = nearest_neighbors(data.view(), 2);
		for (i, row) in graph.indices.outer_iter().enumerate() {
			assert!(row.iter().all(|&j| j as usize != i));
		}
	}

	#[test]
	fn deterministic_across_calls() {
		let data = array![
			[0.3f32, 0.1, 2.0],
			[1.0, -0.5, 0.7],
			[0.0, 0.0, 0.0],
			[2.2, 1.1, -0.4],
			[-1.0, 0.9, 1.5],
		];
		let a = nearest_neighbors(data.view(), 3);
		let b = nearest_neighbors(data.view(), 3);
		assert_eq!(a.indices, b.indices);
		assert_eq!(a.distances, b.distances);
	}
}
