//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `table` - Decision table readers and result writers (CSV, JSON, in-memory)

pub mod table;

pub use table::{
    CsvResultWriter, CsvTableReader, InMemoryTableStore, JsonResultWriter, ResultLayout,
};
