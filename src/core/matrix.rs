//! Row-major request matrices and their ndarray form

use ndarray::Array2;

/// A validated, rectangular observation matrix (rows = observations,
/// columns = features).
#[derive(Debug, Clone)]
pub struct DataMatrix {
	rows: usize,
	cols: usize,
	values: Array2<f32>,
}

/// Why a raw request matrix could not be accepted.
#[derive(Debug, PartialEq, Eq)]
pub enum MatrixError {
	Empty,
	EmptyRow(usize),
	RaggedRow { row: usize, expected: usize, found: usize },
	NonFinite { row: usize, col: usize },
}

impl std::fmt::Display for MatrixError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			MatrixError::Empty => write!(f, "data must contain at least one row"),
			MatrixError::EmptyRow(row) => write!(f, "row {} has no columns", row),
			MatrixError::RaggedRow { row, expected, found } => write!(
				f,
				"row {} has {} columns, expected {}",
				row, found, expected
			),
			MatrixError::NonFinite { row, col } => {
				write!(f, "value at row {}, column {} is not finite", row, col)
			}
		}
	}
}

impl DataMatrix {
	/// Build from the request's nested arrays, checking shape and finiteness.
	pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, MatrixError> {
		if rows.is_empty() {
			return Err(MatrixError::Empty);
		}

		let cols = rows[0].len();
		if cols == 0 {
			return Err(MatrixError::EmptyRow(0));
		}

		for (i, row) in rows.iter().enumerate() {
			if row.len() != cols {
				return Err(MatrixError::RaggedRow {
					row: i,
					expected: cols,
					found: row.len(),
				});
			}
			for (j, &v) in row.iter().enumerate() {
				if !v.is_finite() {
					return Err(MatrixError::NonFinite { row: i, col: j });
				}
			}
		}

		let mut values = Array2::<f32>::zeros((rows.len(), cols));
		for (i, row) in rows.iter().enumerate() {
			for (j, &v) in row.iter().enumerate() {
				values[[i, j]] = v;
			}
		}

		Ok(Self {
			rows: rows.len(),
			cols,
			values,
		})
	}

	pub fn nrows(&self) -> usize {
		self.rows
	}

	pub fn ncols(&self) -> usize {
		self.cols
	}

	pub fn view(&self) -> ndarray::ArrayView2<'_, f32> {
		self.values.view()
	}
}

/// Convert an embedding (or any matrix) back into the nested-list JSON form.
pub fn to_rows(matrix: ndarray::ArrayView2<'_, f32>) -> Vec<Vec<f32>> {
	matrix.outer_iter().map(|row| row.to_vec()).collect()
}
