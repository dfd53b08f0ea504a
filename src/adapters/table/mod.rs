//! Table Adapters
//!
//! Implementations of the TableReader and ResultWriter ports.
//!
//! ## Available Adapters
//!
//! - **CsvTableReader** - Reads decision tables from CSV files
//! - **CsvResultWriter** - Writes the table plus score and rank columns as CSV
//! - **JsonResultWriter** - Writes ranked rows as a JSON report
//! - **InMemoryTableStore** - Stores tables and results in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::table::{CsvResultWriter, CsvTableReader, InMemoryTableStore};
//!
//! // Production: file-based tables
//! let reader = CsvTableReader::new();
//! let writer = CsvResultWriter::new();
//!
//! // Testing: in-memory tables
//! let store = InMemoryTableStore::new();
//! ```

mod csv_result_writer;
mod csv_table_reader;
mod format;
mod in_memory_table_store;
mod json_result_writer;

pub use csv_result_writer::CsvResultWriter;
pub use csv_table_reader::CsvTableReader;
pub use format::{format_float, ResultLayout};
pub use in_memory_table_store::InMemoryTableStore;
pub use json_result_writer::JsonResultWriter;
