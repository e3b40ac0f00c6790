//! UMAP dimensionality reduction

use ndarray::{Array2, ArrayView2};
use rand::{RngExt, SeedableRng};
use tracing::debug;

use crate::config::{EMBEDDING_DIM, INIT_SCALE};
use crate::core::NeighborGraph;

/// Hyperparameters forwarded to the UMAP optimizer.
#[derive(Debug, Clone)]
pub struct ReduceParams {
	pub n_neighbors: usize,
	pub min_dist: f32,
	pub spread: f32,
	pub seed: u64,
}

/// Run UMAP on `data`, reusing a precomputed neighbor graph.
///
/// The graph must have been computed on `data` with `n_neighbors`
/// columns; the caller also returns it to the client, so it is built
/// once per request. Initialization is seeded from `params.seed`.
pub fn reduce(data: ArrayView2<'_, f32>, neighbors: &NeighborGraph, params: &ReduceParams) -> Array2<f32> {
	let n_samples = data.nrows();
	debug!(
		n_samples,
		n_features = data.ncols(),
		graph_k = neighbors.k(),
		"running UMAP optimization"
	);

	let init = initialize_embedding(n_samples, params.seed);

	let config = umap_rs::UmapConfig {
		n_components: EMBEDDING_DIM,
		graph: umap_rs::GraphParams {
			n_neighbors: params.n_neighbors,
			..Default::default()
		},
		manifold: umap_rs::ManifoldParams {
			min_dist: params.min_dist,
			spread: params.spread,
			..Default::default()
		},
		..Default::default()
	};

	let umap = umap_rs::Umap::new(config);
	let fitted = umap.fit(
		data,
		neighbors.indices.view(),
		neighbors.distances.view(),
		init.view(),
	);

	fitted.embedding().to_owned()
}

/// Random initial layout in [-INIT_SCALE, INIT_SCALE], seeded for
/// reproducibility.
fn initialize_embedding(n_samples: usize, seed: u64) -> Array2<f32> {
	let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

	let mut init = Array2::<f32>::zeros((n_samples, EMBEDDING_DIM));
	for i in 0..n_samples {
		for j in 0..EMBEDDING_DIM {
			init[[i, j]] = rng.random_range(-INIT_SCALE..INIT_SCALE);
		}
	}

	init
}
