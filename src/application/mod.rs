//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
pub mod parameters;

pub use handlers::{RankTableCommand, RankTableHandler, DEFAULT_PARAMETER_SEPARATOR};
pub use parameters::{parse_weights, split_impacts};
