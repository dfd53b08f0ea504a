//! In-Memory Table Store Adapter
//!
//! Holds decision tables and written results in memory.
//! Useful for testing and development.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::domain::analysis::{DecisionTable, RankedTable};
use crate::ports::{ResultWriter, TableIoError, TableReader};

/// In-memory implementation of both table ports
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableStore {
    tables: Arc<RwLock<HashMap<PathBuf, DecisionTable>>>,
    results: Arc<RwLock<HashMap<PathBuf, RankedTable>>>,
}

impl InMemoryTableStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table that `read` will return for `location`
    pub fn insert(&self, location: impl Into<PathBuf>, table: DecisionTable) {
        if let Ok(mut tables) = self.tables.write() {
            tables.insert(location.into(), table);
        }
    }

    /// Get the result written to `location`, if any
    pub fn written(&self, location: &Path) -> Option<RankedTable> {
        self.results.read().ok()?.get(location).cloned()
    }

    /// Get the number of written results
    pub fn written_count(&self) -> usize {
        self.results.read().map(|r| r.len()).unwrap_or(0)
    }
}

impl TableReader for InMemoryTableStore {
    fn read(&self, location: &Path) -> Result<DecisionTable, TableIoError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| TableIoError::io("table store lock poisoned"))?;
        tables
            .get(location)
            .cloned()
            .ok_or_else(|| TableIoError::not_found(location.display().to_string()))
    }
}

impl ResultWriter for InMemoryTableStore {
    fn write(&self, location: &Path, ranked: &RankedTable) -> Result<(), TableIoError> {
        let mut results = self
            .results
            .write()
            .map_err(|_| TableIoError::io("table store lock poisoned"))?;
        results.insert(location.to_path_buf(), ranked.clone());
        Ok(())
    }
}
