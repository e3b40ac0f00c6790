//! HTTP handlers

use axum::Json;
use serde_json::json;
use std::time::Instant;
use tokio::task;
use tracing::{info, warn};

use crate::api::error::ApiError;
use crate::api::request::EmbedRequest;
use crate::api::response::EmbedResponse;
use crate::core::{matrix, DataMatrix};
use crate::processing::{nearest_neighbors, reduce, ReduceParams};

/// POST /api/data
///
/// Validates the request, then runs the numeric pipeline on the
/// blocking pool: kNN in the original space (reused as the UMAP graph
/// input), the UMAP optimization, and kNN in the embedded space.
pub async fn embed_handler(
	Json(request): Json<EmbedRequest>,
) -> Result<Json<EmbedResponse>, ApiError> {
	let matrix = request.validate()?;

	if !request.variant.is_available() {
		warn!(variant = request.variant.as_str(), "rejecting unavailable embedding variant");
		return Err(ApiError::UnsupportedVariant {
			variant: request.variant.as_str().to_string(),
		});
	}

	info!(
		variant = request.variant.as_str(),
		rows = matrix.nrows(),
		cols = matrix.ncols(),
		nneighbors = request.nneighbors,
		"received embedding request"
	);
	if request.loss_weight != 0.0 || request.autoencoder {
		warn!("loss_weight/autoencoder apply to the parametric variant only; ignoring");
	}

	let start = Instant::now();
	let response = task::spawn_blocking(move || compute(&request, &matrix))
		.await
		.map_err(|e| {
			// A panic in the numeric stack lands here instead of
			// tearing down the server.
			ApiError::Internal(format!("embedding task failed: {}", e))
		})?;

	info!(elapsed_ms = start.elapsed().as_millis() as u64, "computation done");
	Ok(Json(response))
}

fn compute(request: &EmbedRequest, matrix: &DataMatrix) -> EmbedResponse {
	let params = ReduceParams {
		n_neighbors: request.nneighbors,
		min_dist: request.min_dis,
		spread: request.spread,
		seed: request.random_seed,
	};

	// One high-dimensional kNN pass serves both the UMAP graph and the
	// response arrays.
	let high = nearest_neighbors(matrix.view(), params.n_neighbors);
	let embedding = reduce(matrix.view(), &high, &params);
	let low = nearest_neighbors(embedding.view(), params.n_neighbors);

	EmbedResponse::new(matrix::to_rows(embedding.view()), &high, &low)
}

/// GET /health
pub async fn health_handler() -> Json<serde_json::Value> {
	Json(json!({
		"status": "ok",
		"version": env!("CARGO_PKG_VERSION"),
	}))
}
