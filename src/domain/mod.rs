//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (impact markers, errors)
//! - `analysis` - Pure domain services for TOPSIS ranking

pub mod analysis;
pub mod foundation;
