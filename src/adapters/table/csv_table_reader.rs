//! CSV Table Reader Adapter
//!
//! Loads a decision table from a delimited text file. The first column holds
//! alternative identifiers; every other column must parse as a number.

use std::path::Path;

use tracing::debug;

use crate::domain::analysis::DecisionTable;
use crate::ports::{TableIoError, TableReader, MIN_TABLE_COLUMNS};

/// CSV-backed implementation of [`TableReader`].
#[derive(Debug, Clone)]
pub struct CsvTableReader {
    delimiter: u8,
}

impl CsvTableReader {
    /// Create a comma-delimited reader
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Create a reader for another single-byte delimiter
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableReader for CsvTableReader {
    fn read(&self, location: &Path) -> Result<DecisionTable, TableIoError> {
        if !location.exists() {
            return Err(TableIoError::not_found(location.display().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(location)
            .map_err(csv_error)?;

        let headers = reader.headers().map_err(csv_error)?.clone();
        if headers.len() < MIN_TABLE_COLUMNS {
            return Err(TableIoError::TooFewColumns {
                found: headers.len(),
            });
        }

        let criteria: Vec<&str> = headers.iter().skip(1).collect();
        let mut builder = DecisionTable::builder()
            .identifier_header(&headers[0])
            .criteria(criteria.clone());
        let mut last_line = 1;

        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            last_line = record.position().map(|p| p.line()).unwrap_or(last_line + 1);

            let id = record.get(0).unwrap_or_default().to_string();
            let raw: Vec<String> = record.iter().skip(1).map(str::to_string).collect();
            let values = raw
                .iter()
                .zip(&criteria)
                .map(|(cell, column)| match cell.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(value),
                    Ok(_) => Err(TableIoError::malformed(
                        last_line,
                        format!("value '{}' in column '{}' is not a finite number", cell, column),
                    )),
                    Err(_) => Err(TableIoError::malformed(
                        last_line,
                        format!("value '{}' in column '{}' is not a number", cell, column),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?;

            builder = builder.alternative_with_raw(id, values, raw);
        }

        let table = builder
            .build()
            .map_err(|e| TableIoError::malformed(last_line, e.to_string()))?;

        debug!(
            path = %location.display(),
            alternatives = table.alternative_count(),
            criteria = table.criterion_count(),
            "Loaded decision table"
        );

        Ok(table)
    }
}

fn csv_error(err: csv::Error) -> TableIoError {
    if err.is_io_error() {
        return TableIoError::io(err.to_string());
    }
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    TableIoError::malformed(line, err.to_string())
}
