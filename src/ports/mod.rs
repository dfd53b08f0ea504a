//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Table Ports
//!
//! - `TableReader` - Loads a decision table from storage
//! - `ResultWriter` - Persists a ranked table

mod table_io;

pub use table_io::{ResultWriter, TableIoError, TableReader, MIN_TABLE_COLUMNS};
