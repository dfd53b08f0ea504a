//! RankTableHandler - Command handler for ranking the alternatives of a table.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::parameters::{parse_weights, split_impacts};
use crate::domain::analysis::{RankedTable, TopsisEngine};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ResultWriter, TableReader};

/// Default separator between weight and impact entries.
pub const DEFAULT_PARAMETER_SEPARATOR: char = ',';

/// Command to rank a decision table and persist the result.
#[derive(Debug, Clone)]
pub struct RankTableCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Delimited weights, e.g. `"1,1,1,2"`.
    pub weights: String,
    /// Delimited `+`/`-` markers, e.g. `"+,+,-,+"`.
    pub impacts: String,
}

/// Handler for ranking tables.
pub struct RankTableHandler {
    reader: Arc<dyn TableReader>,
    writer: Arc<dyn ResultWriter>,
    separator: char,
}

impl RankTableHandler {
    pub fn new(reader: Arc<dyn TableReader>, writer: Arc<dyn ResultWriter>) -> Self {
        Self {
            reader,
            writer,
            separator: DEFAULT_PARAMETER_SEPARATOR,
        }
    }

    /// Use another separator for weight and impact lists.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Loads, ranks, and writes a table.
    ///
    /// Nothing is written unless every check passes.
    pub fn handle(&self, cmd: RankTableCommand) -> Result<RankedTable, DomainError> {
        // 1. Load the table
        let table = self.reader.read(&cmd.input)?;

        // 2. Parse parameters
        let weights = parse_weights(&cmd.weights, self.separator)?;
        let impacts = split_impacts(&cmd.impacts, self.separator);

        // 3. Check parameter counts against the criteria columns
        let criteria = table.criterion_count();
        check_count("weights", criteria, weights.len())?;
        check_count("impacts", criteria, impacts.len())?;

        // 4. Rank
        let result = TopsisEngine::compute_with_symbols(&table.matrix, &weights, &impacts)?;
        let ranked = RankedTable::new(table, result);

        debug!(
            input = %cmd.input.display(),
            best = ?ranked.best_alternative(),
            "Ranked decision table"
        );

        // 5. Persist
        self.writer.write(&cmd.output, &ranked)?;

        info!(
            output = %cmd.output.display(),
            alternatives = ranked.table.alternative_count(),
            "Wrote TOPSIS results"
        );

        Ok(ranked)
    }
}

fn check_count(vector: &str, expected: usize, actual: usize) -> Result<(), DomainError> {
    if expected == actual {
        return Ok(());
    }
    Err(DomainError::new(
        ErrorCode::DimensionMismatch,
        format!("Number of {} must match the number of criteria columns", vector),
    )
    .with_detail("vector", vector)
    .with_detail("expected", expected.to_string())
    .with_detail("actual", actual.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTableStore;
    use crate::domain::analysis::DecisionTable;
    use crate::ports::TableIoError;
    use std::path::Path;

    struct FailingWriter;

    impl ResultWriter for FailingWriter {
        fn write(&self, _location: &Path, _ranked: &RankedTable) -> Result<(), TableIoError> {
            Err(TableIoError::io("disk full"))
        }
    }

    fn phones() -> DecisionTable {
        DecisionTable::builder()
            .identifier_header("Model")
            .criteria(vec!["Price", "Storage", "Camera", "Looks"])
            .alternative("M1", vec![250.0, 16.0, 12.0, 5.0])
            .alternative("M2", vec![200.0, 16.0, 8.0, 3.0])
            .alternative("M3", vec![300.0, 32.0, 16.0, 4.0])
            .alternative("M4", vec![275.0, 32.0, 8.0, 4.0])
            .alternative("M5", vec![225.0, 16.0, 16.0, 2.0])
            .build()
            .unwrap()
    }

    fn setup() -> (InMemoryTableStore, RankTableHandler) {
        let store = InMemoryTableStore::new();
        store.insert("phones.csv", phones());
        let handler = RankTableHandler::new(Arc::new(store.clone()), Arc::new(store.clone()));
        (store, handler)
    }

    fn command(weights: &str, impacts: &str) -> RankTableCommand {
        RankTableCommand {
            input: PathBuf::from("phones.csv"),
            output: PathBuf::from("result.csv"),
            weights: weights.to_string(),
            impacts: impacts.to_string(),
        }
    }

    #[test]
    fn ranks_and_writes_table() {
        let (store, handler) = setup();

        let ranked = handler.handle(command("1,1,1,1", "+,+,+,-")).unwrap();

        assert_eq!(ranked.result.ranks, vec![5.0, 4.0, 1.0, 3.0, 2.0]);
        assert_eq!(ranked.best_alternative(), Some("M3"));
        assert_eq!(store.written(Path::new("result.csv")), Some(ranked));
    }

    #[test]
    fn custom_separator() {
        let (_store, handler) = setup();
        let handler = handler.with_separator(';');

        let ranked = handler.handle(command("1;1;1;1", "+;+;+;-")).unwrap();

        assert_eq!(ranked.best_alternative(), Some("M3"));
    }

    #[test]
    fn missing_input_fails() {
        let (store, handler) = setup();
        let mut cmd = command("1,1,1,1", "+,+,+,-");
        cmd.input = PathBuf::from("absent.csv");

        let err = handler.handle(cmd).unwrap_err();

        assert_eq!(err.code, ErrorCode::MissingInput);
        assert_eq!(store.written_count(), 0);
    }

    #[test]
    fn malformed_weight_fails() {
        let (store, handler) = setup();

        let err = handler.handle(command("1,1,one,1", "+,+,+,-")).unwrap_err();

        assert_eq!(err.code, ErrorCode::MalformedInput);
        assert_eq!(err.details.get("field"), Some(&"weights[2]".to_string()));
        assert_eq!(store.written_count(), 0);
    }

    #[test]
    fn empty_weight_is_malformed() {
        let (store, handler) = setup();

        let err = handler.handle(command("1,,1,1", "+,+,+,-")).unwrap_err();

        assert_eq!(err.code, ErrorCode::MalformedInput);
        assert_eq!(err.message, "Field 'weights[1]' cannot be empty");
        assert_eq!(store.written_count(), 0);
    }

    #[test]
    fn weight_count_mismatch_fails() {
        let (store, handler) = setup();

        let err = handler.handle(command("1,1,1", "+,+,+,-")).unwrap_err();

        assert_eq!(err.code, ErrorCode::DimensionMismatch);
        assert_eq!(
            err.message,
            "Number of weights must match the number of criteria columns"
        );
        assert_eq!(err.details.get("expected"), Some(&"4".to_string()));
        assert_eq!(err.details.get("actual"), Some(&"3".to_string()));
        assert_eq!(store.written_count(), 0);
    }

    #[test]
    fn impact_count_mismatch_fails() {
        let (store, handler) = setup();

        let err = handler.handle(command("1,1,1,1", "+,+,-")).unwrap_err();

        assert_eq!(err.code, ErrorCode::DimensionMismatch);
        assert_eq!(err.details.get("vector"), Some(&"impacts".to_string()));
        assert_eq!(store.written_count(), 0);
    }

    #[test]
    fn invalid_impact_fails() {
        let (store, handler) = setup();

        let err = handler.handle(command("1,1,1,1", "+,+,x,+")).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidImpact);
        assert_eq!(err.details.get("symbol"), Some(&"x".to_string()));
        assert_eq!(store.written_count(), 0);
    }

    #[test]
    fn degenerate_column_fails() {
        let store = InMemoryTableStore::new();
        store.insert(
            "zeros.csv",
            DecisionTable::builder()
                .identifier_header("Id")
                .criteria(vec!["A", "B"])
                .alternative("x", vec![1.0, 0.0])
                .alternative("y", vec![2.0, 0.0])
                .build()
                .unwrap(),
        );
        let handler = RankTableHandler::new(Arc::new(store.clone()), Arc::new(store.clone()));
        let mut cmd = command("1,1", "+,+");
        cmd.input = PathBuf::from("zeros.csv");

        let err = handler.handle(cmd).unwrap_err();

        assert_eq!(err.code, ErrorCode::DegenerateColumn);
        assert_eq!(err.details.get("column"), Some(&"1".to_string()));
        assert_eq!(store.written_count(), 0);
    }

    #[test]
    fn writer_failure_propagates() {
        let store = InMemoryTableStore::new();
        store.insert("phones.csv", phones());
        let handler = RankTableHandler::new(Arc::new(store), Arc::new(FailingWriter));

        let err = handler.handle(command("1,1,1,1", "+,+,+,-")).unwrap_err();

        assert_eq!(err.code, ErrorCode::IoError);
        assert!(err.message.contains("disk full"));
    }
}
