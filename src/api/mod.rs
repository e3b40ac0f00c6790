//! # HTTP API
//!
//! Single-endpoint JSON API: `POST /api/data` computes an embedding and
//! its neighbor graphs, `GET /health` is a liveness probe. Cross-origin
//! requests are allowed from any origin, matching the reference server.

pub mod error;
pub mod handler;
pub mod request;
pub mod response;

pub use error::ApiError;
pub use request::EmbedRequest;
pub use response::EmbedResponse;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::MAX_BODY_BYTES;

/// Build the service router. Kept separate from serving so tests can
/// drive it directly.
pub fn router() -> Router {
	Router::new()
		.route("/api/data", post(handler::embed_handler))
		.route("/health", get(handler::health_handler))
		.layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		)
		.layer(TraceLayer::new_for_http())
}
