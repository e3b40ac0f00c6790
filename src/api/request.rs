//! Request body for POST /api/data

use serde::Deserialize;

use crate::api::error::ApiError;
use crate::config::{
	DEFAULT_MIN_DIST, DEFAULT_N_NEIGHBORS, DEFAULT_RANDOM_SEED, DEFAULT_SPREAD, MIN_NEIGHBORS,
};
use crate::core::{DataMatrix, Variant};

/// Embedding request.
///
/// `loss_weight` and `autoencoder` belong to the parametric variant of
/// the reference client; they are accepted so existing clients keep
/// working, and ignored by the standard pipeline (which is also what
/// the reference server did).
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedRequest {
	#[serde(rename = "type")]
	pub variant: Variant,

	pub data: Vec<Vec<f32>>,

	#[serde(default = "default_n_neighbors")]
	pub nneighbors: usize,

	#[serde(default = "default_min_dist")]
	pub min_dis: f32,

	#[serde(default = "default_spread")]
	pub spread: f32,

	#[serde(default = "default_random_seed")]
	pub random_seed: u64,

	#[serde(default)]
	pub loss_weight: f32,

	#[serde(default)]
	pub autoencoder: bool,
}

fn default_n_neighbors() -> usize {
	DEFAULT_N_NEIGHBORS
}

fn default_min_dist() -> f32 {
	DEFAULT_MIN_DIST
}

fn default_spread() -> f32 {
	DEFAULT_SPREAD
}

fn default_random_seed() -> u64 {
	DEFAULT_RANDOM_SEED
}

impl EmbedRequest {
	/// Check the request and build the validated observation matrix.
	///
	/// The neighbor bound mirrors what the embedding library requires:
	/// the graph needs at least `MIN_NEIGHBORS` neighbors per point and
	/// cannot use more neighbors than other points exist.
	pub fn validate(&self) -> Result<DataMatrix, ApiError> {
		let matrix = DataMatrix::from_rows(&self.data)
			.map_err(|e| ApiError::validation("data", e.to_string()))?;

		if self.nneighbors < MIN_NEIGHBORS {
			return Err(ApiError::validation(
				"nneighbors",
				format!("nneighbors must be at least {}", MIN_NEIGHBORS),
			));
		}

		if self.nneighbors >= matrix.nrows() {
			return Err(ApiError::validation(
				"nneighbors",
				format!(
					"nneighbors must be smaller than the number of rows ({} >= {})",
					self.nneighbors,
					matrix.nrows()
				),
			));
		}

		if self.min_dis < 0.0 || !self.min_dis.is_finite() {
			return Err(ApiError::validation(
				"min_dis",
				"min_dis must be a finite value >= 0",
			));
		}

		if self.spread <= 0.0 || !self.spread.is_finite() {
			return Err(ApiError::validation(
				"spread",
				"spread must be a finite value > 0",
			));
		}

		// The embedding library panics when min_dist exceeds spread.
		if self.min_dis > self.spread {
			return Err(ApiError::validation(
				"min_dis",
				format!(
					"min_dis ({}) must not exceed spread ({})",
					self.min_dis, self.spread
				),
			));
		}

		Ok(matrix)
	}
}
