//! Decision Matrix - Rectangular grid of alternatives x criteria.

use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Numeric decision matrix: one row per alternative, one column per criterion.
///
/// Construction validates the shape, so every `DecisionMatrix` has at least
/// one row and one column, identical row lengths, and only finite values.
/// Derived matrices (normalized, weighted) are always new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl DecisionMatrix {
    /// Creates a matrix, validating shape and values.
    ///
    /// # Errors
    /// - `EmptyMatrix`: no rows, or a first row with no values
    /// - `RaggedMatrix`: a row whose length differs from the first row
    /// - `NonFiniteValue`: a NaN or infinite cell
    pub fn try_new(rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            return Err(AnalysisError::EmptyMatrix);
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(AnalysisError::RaggedMatrix {
                    row: row_index,
                    expected: columns,
                    actual: row.len(),
                });
            }
            if let Some(column) = row.iter().position(|v| !v.is_finite()) {
                return Err(AnalysisError::NonFiniteValue {
                    row: row_index,
                    column,
                });
            }
        }

        Ok(Self { rows, columns })
    }

    /// Builds a new matrix of the same shape by applying `f(row, column, value)` to every cell.
    pub(crate) fn map_cells(&self, f: impl Fn(usize, usize, f64) -> f64) -> Self {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.iter().enumerate().map(|(j, &v)| f(i, j, v)).collect())
            .collect();

        Self {
            rows,
            columns: self.columns,
        }
    }

    /// Returns the number of alternatives.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns a single row.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns the value at `(row, column)`.
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Iterates over the values of one criterion, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |row| row.get(column).copied())
    }

    /// Euclidean norm of one criterion's values.
    ///
    /// Zero only when every value in the column is zero; finite columns
    /// never overflow to infinity or underflow to zero.
    pub fn column_norm(&self, column: usize) -> f64 {
        let (scale, root) = self.scaled_column_norm(column);
        scale * root
    }

    /// Splits a column norm into `(max |v|, sqrt(sum((v / max |v|)^2)))`.
    ///
    /// The root lies in `[1, sqrt(rows)]` unless the column is all zero,
    /// in which case both parts are zero.
    pub(crate) fn scaled_column_norm(&self, column: usize) -> (f64, f64) {
        let scale = self.column(column).fold(0.0_f64, |max, v| max.max(v.abs()));
        if scale == 0.0 {
            return (0.0, 0.0);
        }
        let sum: f64 = self
            .column(column)
            .map(|v| {
                let scaled = v / scale;
                scaled * scaled
            })
            .sum();
        (scale, sum.sqrt())
    }
}

impl TryFrom<Vec<Vec<f64>>> for DecisionMatrix {
    type Error = AnalysisError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::try_new(rows)
    }
}

impl From<DecisionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DecisionMatrix) -> Self {
        matrix.rows
    }
}
