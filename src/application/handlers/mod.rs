//! Command handlers.
//!
//! Handlers orchestrate ports and domain services for a single use case.

mod rank_table;

pub use rank_table::{RankTableCommand, RankTableHandler, DEFAULT_PARAMETER_SEPARATOR};
