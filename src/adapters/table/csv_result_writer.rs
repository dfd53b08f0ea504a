//! CSV Result Writer Adapter
//!
//! Writes the original table back out with two appended columns:
//! the closeness score and the rank.

use std::path::Path;

use tracing::debug;

use super::format::{format_float, ResultLayout};
use crate::domain::analysis::RankedTable;
use crate::ports::{ResultWriter, TableIoError};

/// CSV-backed implementation of [`ResultWriter`].
#[derive(Debug, Clone)]
pub struct CsvResultWriter {
    delimiter: u8,
    layout: ResultLayout,
}

impl CsvResultWriter {
    /// Create a comma-delimited writer with the default layout
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            layout: ResultLayout::default(),
        }
    }

    /// Use another single-byte delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Use custom column names or precision
    pub fn with_layout(mut self, layout: ResultLayout) -> Self {
        self.layout = layout;
        self
    }
}

impl Default for CsvResultWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultWriter for CsvResultWriter {
    fn write(&self, location: &Path, ranked: &RankedTable) -> Result<(), TableIoError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(location)
            .map_err(|e| TableIoError::io(e.to_string()))?;

        let mut header = ranked.table.header();
        header.push(&self.layout.score_column);
        header.push(&self.layout.rank_column);
        writer
            .write_record(&header)
            .map_err(|e| TableIoError::io(e.to_string()))?;

        for row in ranked.rows() {
            let record = std::iter::once(row.alternative.to_string())
                .chain(row.values.iter().cloned())
                .chain([
                    format_float(row.score, self.layout.precision),
                    format_float(row.rank, None),
                ]);
            writer
                .write_record(record)
                .map_err(|e| TableIoError::io(e.to_string()))?;
        }

        writer.flush()?;

        debug!(
            path = %location.display(),
            rows = ranked.table.alternative_count(),
            "Wrote ranked table"
        );

        Ok(())
    }
}
