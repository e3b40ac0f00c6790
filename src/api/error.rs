//! API error type and its HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("{message}")]
	Validation { field: String, message: String },

	#[error("embedding variant '{variant}' is not available")]
	UnsupportedVariant { variant: String },

	#[error("internal error: {0}")]
	Internal(String),
}

/// Wire shape of an error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error_type: String,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<HashMap<String, Value>>,
}

impl ApiError {
	pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
		ApiError::Validation {
			field: field.into(),
			message: message.into(),
		}
	}

	pub fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
			ApiError::UnsupportedVariant { .. } => StatusCode::UNPROCESSABLE_ENTITY,
			ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	pub fn to_response_body(&self) -> ErrorResponse {
		let (error_type, details) = match self {
			ApiError::Validation { field, .. } => {
				let mut details = HashMap::new();
				details.insert("field".to_string(), Value::String(field.clone()));
				("validation_error", Some(details))
			}
			ApiError::UnsupportedVariant { .. } => {
				let mut details = HashMap::new();
				details.insert(
					"available_variants".to_string(),
					Value::Array(
						crate::core::Variant::available()
							.iter()
							.map(|v| Value::String((*v).to_string()))
							.collect(),
					),
				);
				("unsupported_variant", Some(details))
			}
			ApiError::Internal(_) => ("internal_error", None),
		};

		ErrorResponse {
			error_type: error_type.to_string(),
			message: self.to_string(),
			details,
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status_code(), Json(self.to_response_body())).into_response()
	}
}
