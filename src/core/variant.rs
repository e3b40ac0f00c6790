//! Embedding algorithm variants

use serde::{Deserialize, Serialize};

/// Algorithm selected by the request's `type` field.
///
/// `Regular` is the standard UMAP optimization. `Parametric` names the
/// autoencoder-backed variant of the reference client; no pre-built
/// implementation of it exists in this backend, so requests for it are
/// answered with an unsupported-variant error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
	Regular,
	Parametric,
}

impl Variant {
	/// Wire name of this variant.
	pub fn as_str(&self) -> &'static str {
		match self {
			Variant::Regular => "Regular",
			Variant::Parametric => "Parametric",
		}
	}

	/// Variants this backend can actually compute.
	pub fn available() -> &'static [&'static str] {
		&["Regular"]
	}

	pub fn is_available(&self) -> bool {
		matches!(self, Variant::Regular)
	}
}
