//! Topsis - Multi-criteria ranking of alternatives
//!
//! This crate ranks alternatives described by numeric criteria with TOPSIS
//! (Technique for Order of Preference by Similarity to Ideal Solution): each
//! alternative is scored by its relative closeness to the ideal best and
//! away from the ideal worst.
//!
//! # Example
//!
//! ```
//! use topsis::domain::analysis::{DecisionMatrix, TopsisEngine};
//! use topsis::domain::foundation::Impact;
//!
//! let matrix = DecisionMatrix::try_new(vec![
//!     vec![250.0, 16.0],
//!     vec![200.0, 32.0],
//! ])
//! .unwrap();
//!
//! let result = TopsisEngine::compute(&matrix, &[1.0, 1.0], &[Impact::Cost, Impact::Benefit]).unwrap();
//! assert_eq!(result.ranks, vec![2.0, 1.0]);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
