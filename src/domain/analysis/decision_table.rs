//! Decision Table - Labelled alternatives around a decision matrix.
//!
//! The engine only sees the numeric [`DecisionMatrix`]. The table keeps the
//! identifier column, the header, and the raw cell text so results can be
//! written back next to the original data unchanged.

use serde::Serialize;

use super::{AnalysisError, DecisionMatrix, TopsisResult};

/// A tabular decision problem: one identifier column plus numeric criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionTable {
    /// Header of the identifier column.
    pub identifier_header: String,
    /// Headers of the criterion columns, in order.
    pub criterion_headers: Vec<String>,
    /// Ordered alternative identifiers.
    pub alternative_ids: Vec<String>,
    /// Criterion cells exactly as read, one row per alternative.
    pub raw_values: Vec<Vec<String>>,
    /// Parsed criterion values.
    pub matrix: DecisionMatrix,
}

impl DecisionTable {
    /// Creates a builder for constructing a decision table.
    pub fn builder() -> DecisionTableBuilder {
        DecisionTableBuilder::new()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternative_ids.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criterion_headers.len()
    }

    /// Returns the number of columns including the identifier column.
    pub fn column_count(&self) -> usize {
        self.criterion_count() + 1
    }

    /// Full header row: identifier first, then criteria.
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(self.identifier_header.as_str())
            .chain(self.criterion_headers.iter().map(String::as_str))
            .collect()
    }
}

/// Builder for constructing DecisionTable instances.
#[derive(Debug, Default)]
pub struct DecisionTableBuilder {
    identifier_header: String,
    criterion_headers: Vec<String>,
    alternative_ids: Vec<String>,
    raw_values: Vec<Vec<String>>,
    rows: Vec<Vec<f64>>,
}

impl DecisionTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier column header.
    pub fn identifier_header(mut self, header: impl Into<String>) -> Self {
        self.identifier_header = header.into();
        self
    }

    /// Sets the criterion column headers.
    pub fn criteria(mut self, headers: Vec<impl Into<String>>) -> Self {
        self.criterion_headers = headers.into_iter().map(|h| h.into()).collect();
        self
    }

    /// Adds an alternative; raw cells are rendered from the values.
    pub fn alternative(self, id: impl Into<String>, values: Vec<f64>) -> Self {
        let raw = values.iter().map(|v| v.to_string()).collect();
        self.alternative_with_raw(id, values, raw)
    }

    /// Adds an alternative keeping the original cell text.
    pub fn alternative_with_raw(
        mut self,
        id: impl Into<String>,
        values: Vec<f64>,
        raw: Vec<String>,
    ) -> Self {
        self.alternative_ids.push(id.into());
        self.rows.push(values);
        self.raw_values.push(raw);
        self
    }

    /// Builds the decision table.
    ///
    /// # Errors
    /// - Matrix shape errors from [`DecisionMatrix::try_new`]
    /// - `RaggedMatrix` if a row's raw cells differ in count from its values
    /// - `DimensionMismatch` if the header count differs from the column count
    pub fn build(self) -> Result<DecisionTable, AnalysisError> {
        let matrix = DecisionMatrix::try_new(self.rows)?;

        if let Some((row, raw)) = self
            .raw_values
            .iter()
            .enumerate()
            .find(|(_, raw)| raw.len() != matrix.column_count())
        {
            return Err(AnalysisError::RaggedMatrix {
                row,
                expected: matrix.column_count(),
                actual: raw.len(),
            });
        }

        if self.criterion_headers.len() != matrix.column_count() {
            return Err(AnalysisError::dimension_mismatch(
                "criterion headers",
                matrix.column_count(),
                self.criterion_headers.len(),
            ));
        }

        Ok(DecisionTable {
            identifier_header: self.identifier_header,
            criterion_headers: self.criterion_headers,
            alternative_ids: self.alternative_ids,
            raw_values: self.raw_values,
            matrix,
        })
    }
}

/// One output row: the original data plus score and rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow<'a> {
    pub alternative: &'a str,
    pub values: &'a [String],
    pub score: f64,
    pub rank: f64,
}

/// A decision table together with its TOPSIS result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTable {
    pub table: DecisionTable,
    pub result: TopsisResult,
}

impl RankedTable {
    /// Pairs a table with its result.
    pub fn new(table: DecisionTable, result: TopsisResult) -> Self {
        Self { table, result }
    }

    /// Iterates rows in input order.
    pub fn rows(&self) -> impl Iterator<Item = RankedRow<'_>> {
        self.table
            .alternative_ids
            .iter()
            .zip(&self.table.raw_values)
            .zip(self.result.scores.iter().zip(&self.result.ranks))
            .map(|((alternative, values), (&score, &rank))| RankedRow {
                alternative,
                values,
                score,
                rank,
            })
    }

    /// Identifier of the unique best alternative, None on a tie.
    pub fn best_alternative(&self) -> Option<&str> {
        self.result
            .best()
            .and_then(|index| self.table.alternative_ids.get(index))
            .map(String::as_str)
    }
}
