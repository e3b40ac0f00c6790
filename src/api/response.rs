//! Response body for POST /api/data

use serde::Serialize;

use crate::core::NeighborGraph;

/// Embedding response, with the exact key spelling the reference
/// client parses.
#[derive(Debug, Serialize)]
pub struct EmbedResponse {
	#[serde(rename = "UMAPData")]
	pub umap_data: Vec<Vec<f32>>,

	#[serde(rename = "nneighbors_HD")]
	pub nneighbors_hd: Vec<Vec<u32>>,

	#[serde(rename = "nneighbors_HD_dis")]
	pub nneighbors_hd_dis: Vec<Vec<f32>>,

	#[serde(rename = "nneighbors_2D")]
	pub nneighbors_2d: Vec<Vec<u32>>,

	#[serde(rename = "nneighbors_2D_dis")]
	pub nneighbors_2d_dis: Vec<Vec<f32>>,
}

impl EmbedResponse {
	pub fn new(embedding: Vec<Vec<f32>>, high: &NeighborGraph, low: &NeighborGraph) -> Self {
		Self {
			umap_data: embedding,
			nneighbors_hd: high.index_rows(),
			nneighbors_hd_dis: high.distance_rows(),
			nneighbors_2d: low.index_rows(),
			nneighbors_2d_dis: low.distance_rows(),
		}
	}
}
