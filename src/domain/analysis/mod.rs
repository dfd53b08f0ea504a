//! Analysis Module - Pure domain services for TOPSIS ranking.
//!
//! This module contains stateless functions that turn a decision matrix,
//! a weight vector, and an impact vector into closeness scores and ranks.
//!
//! # Components
//!
//! - `DecisionMatrix` - Validated rectangular grid of criterion values
//! - `DecisionTable` - Labelled alternatives and raw cells around a matrix
//! - `TopsisEngine` - Normalization, weighting, ideal points, separation, closeness
//! - `ranking` - Descending fractional ranks with averaged ties
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod decision_matrix;
mod decision_table;
mod errors;
pub mod ranking;
mod topsis_engine;

// Re-export all public types
pub use decision_matrix::DecisionMatrix;
pub use decision_table::{DecisionTable, DecisionTableBuilder, RankedRow, RankedTable};
pub use errors::AnalysisError;
pub use topsis_engine::{IdealPoints, Separations, TopsisAnalysis, TopsisEngine, TopsisResult};
