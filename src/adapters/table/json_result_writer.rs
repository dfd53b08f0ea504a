//! JSON Result Writer Adapter
//!
//! Writes ranked results as a pretty-printed JSON report.

use serde::Serialize;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::analysis::{RankedRow, RankedTable};
use crate::ports::{ResultWriter, TableIoError};

/// JSON document produced by [`JsonResultWriter`].
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    identifier: &'a str,
    criteria: &'a [String],
    best_alternative: Option<&'a str>,
    rows: Vec<RankedRow<'a>>,
}

/// JSON-backed implementation of [`ResultWriter`].
#[derive(Debug, Clone, Default)]
pub struct JsonResultWriter;

impl JsonResultWriter {
    /// Create a JSON writer
    pub fn new() -> Self {
        Self
    }

    /// Render the report without touching the filesystem
    pub fn render(ranked: &RankedTable) -> Result<String, TableIoError> {
        let report = JsonReport {
            identifier: &ranked.table.identifier_header,
            criteria: &ranked.table.criterion_headers,
            best_alternative: ranked.best_alternative(),
            rows: ranked.rows().collect(),
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| TableIoError::serialization(e.to_string()))
    }
}

impl ResultWriter for JsonResultWriter {
    fn write(&self, location: &Path, ranked: &RankedTable) -> Result<(), TableIoError> {
        let json = Self::render(ranked)?;
        fs::write(location, json)?;

        debug!(path = %location.display(), "Wrote ranked report");
        Ok(())
    }
}
